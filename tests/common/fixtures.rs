//! Test fixtures - reusable node lists for tests.

use hierslice::{JsonNodeRepository, Node, NodeTree};

/// Country → Region → City, the shape used throughout the scenarios
pub fn geo_tree() -> NodeTree {
    NodeTree::new(geo_nodes()).unwrap()
}

pub fn geo_nodes() -> Vec<Node> {
    vec![
        Node::root("NL", "NL").with_target("Geo", "Country"),
        Node::child("NL|North", "NL", 1, "North").with_target("Geo", "Region"),
        Node::child("NL|North|Amsterdam", "NL|North", 2, "Amsterdam")
            .leaf()
            .with_target("Geo", "City"),
        Node::child("NL|North|Haarlem", "NL|North", 2, "Haarlem")
            .leaf()
            .with_target("Geo", "City"),
        Node::child("NL|South", "NL", 1, "South").with_target("Geo", "Region"),
        Node::child("NL|South|Maastricht", "NL|South", 2, "Maastricht")
            .leaf()
            .with_target("Geo", "City"),
        Node::root("BE", "BE").with_target("Geo", "Country"),
        Node::child("BE|Flanders", "BE", 1, "Flanders").with_target("Geo", "Region"),
        Node::child("BE|Flanders|Gent", "BE|Flanders", 2, "Gent")
            .leaf()
            .with_target("Geo", "City"),
    ]
}

/// [`geo_tree`] as the JSON node list the CLI reads
pub fn geo_nodes_json() -> String {
    JsonNodeRepository::to_json(&geo_tree()).unwrap()
}

/// The three-node chain from the basic examples
pub fn single_chain_tree() -> NodeTree {
    NodeTree::new(vec![
        Node::root("NL", "NL").with_target("Geo", "Country"),
        Node::child("NL|North", "NL", 1, "North").with_target("Geo", "Region"),
        Node::child("NL|North|Amsterdam", "NL|North", 2, "Amsterdam")
            .leaf()
            .with_target("Geo", "City"),
    ])
    .unwrap()
}

/// Year → Quarter → Month with numeric years, as a host would send it
pub const CALENDAR_NODES_JSON: &str = r#"[
  {"ownId": "2016", "parentId": "", "level": 0, "value": 2016, "isExpand": true,
   "filterTarget": {"table": "Calendar", "column": "Year"}},
  {"ownId": "2016|Q1", "parentId": "2016", "level": 1, "value": "Q1",
   "filterTarget": {"table": "Calendar", "column": "Quarter"}},
  {"ownId": "2016|Q1|Jan", "parentId": "2016|Q1", "level": 2, "value": "Jan", "isLeaf": true,
   "filterTarget": {"table": "Calendar", "column": "Month"}},
  {"ownId": "2016|Q1|Feb", "parentId": "2016|Q1", "level": 2, "value": "Feb", "isLeaf": true,
   "filterTarget": {"table": "Calendar", "column": "Month"}},
  {"ownId": "2016|Q2", "parentId": "2016", "level": 1, "value": "Q2",
   "filterTarget": {"table": "Calendar", "column": "Quarter"}},
  {"ownId": "2016|Q2|Apr", "parentId": "2016|Q2", "level": 2, "value": "Apr", "isLeaf": true,
   "filterTarget": {"table": "Calendar", "column": "Month"}},
  {"ownId": "2017", "parentId": "", "level": 0, "value": 2017,
   "filterTarget": {"table": "Calendar", "column": "Year"}},
  {"ownId": "2017|Q1", "parentId": "2017", "level": 1, "value": "Q1",
   "filterTarget": {"table": "Calendar", "column": "Quarter"}},
  {"ownId": "2017|Q1|Jan", "parentId": "2017|Q1", "level": 2, "value": "Jan", "isLeaf": true,
   "filterTarget": {"table": "Calendar", "column": "Month"}}
]
"#;

/// A node list whose second node points at a parent that does not exist
pub const BROKEN_NODES_JSON: &str = r#"[
  {"ownId": "NL", "level": 0, "value": "NL",
   "filterTarget": {"table": "Geo", "column": "Country"}},
  {"ownId": "NL|North|Amsterdam", "parentId": "NL|North", "level": 2, "value": "Amsterdam",
   "isLeaf": true, "filterTarget": {"table": "Geo", "column": "City"}}
]
"#;
