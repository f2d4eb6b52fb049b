//! Remote traversal specification types
//!
//! A [`TraversalSpecification`] is the declarative description of a
//! traversal that the remote engine understands. The bridge assembles one
//! per legacy call from the old parameter shapes; the engine is responsible
//! for serializing and executing it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taproot_core::{Direction, RelationshipType};

/// Traversal order. These two are the only orders the remote engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    BreadthFirst,
    DepthFirst,
}

/// Node uniqueness policy.
///
/// Fixed at [`Uniqueness::NodeGlobal`] for every bridged traversal: a node
/// already visited anywhere earlier in the traversal is never visited
/// again, regardless of which path reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Uniqueness {
    #[default]
    NodeGlobal,
}

/// A script evaluated remotely, identified by language name and body.
///
/// The language is looked up by name on the remote side; this layer does
/// not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptExpression {
    pub language: String,
    pub body: String,
}

impl ScriptExpression {
    pub fn new(language: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            body: body.into(),
        }
    }
}

/// Built-in result filters the remote engine knows by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinFilter {
    /// Every node, the start node included
    All,
    /// Every node except the start node
    AllButStartNode,
}

/// Remote-side result filter: a named built-in or a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSpec {
    Builtin(BuiltinFilter),
    Script(ScriptExpression),
}

impl FilterSpec {
    /// Resolve the legacy (language, body) filter pair.
    ///
    /// The pseudo-language `builtin` selects a named filter; any other
    /// language means the body is a script in that language. An unknown
    /// built-in name resolves to no filter, matching the lenient lookup of
    /// the old API.
    pub fn resolve(language: &str, body: &str) -> Option<Self> {
        if language.eq_ignore_ascii_case("builtin") {
            if body.eq_ignore_ascii_case("all") {
                Some(Self::Builtin(BuiltinFilter::All))
            } else if body.eq_ignore_ascii_case("all_but_start_node") {
                Some(Self::Builtin(BuiltinFilter::AllButStartNode))
            } else {
                None
            }
        } else {
            Some(Self::Script(ScriptExpression::new(language, body)))
        }
    }
}

/// Depth control: a literal limit or a remotely evaluated prune script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthControl {
    MaxDepth(u32),
    Prune(ScriptExpression),
}

/// One kind of edge to traverse: a relationship type plus a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSpec {
    pub relationship_type: RelationshipType,
    pub direction: Direction,
}

impl RelationshipSpec {
    pub fn new(relationship_type: impl Into<RelationshipType>, direction: Direction) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            direction,
        }
    }

    /// Validate the legacy flat relationship list: alternating type and
    /// direction values, so the list must be non-empty and of even length.
    ///
    /// Positions in errors are indexes into the flat list. Specs come back
    /// in input order; the remote engine treats them as an unordered set.
    pub fn from_flat_list(values: &[Value]) -> Result<Vec<RelationshipSpec>> {
        if values.is_empty() || values.len() % 2 != 0 {
            return Err(Error::MalformedRelationshipList(values.len()));
        }

        let mut specs = Vec::with_capacity(values.len() / 2);
        for (pair, chunk) in values.chunks(2).enumerate() {
            let position = pair * 2;

            let relationship_type = match chunk[0].as_str() {
                Some(name) if !name.is_empty() => RelationshipType::new(name),
                _ => {
                    return Err(Error::InvalidRelationshipType {
                        position,
                        found: chunk[0].to_string(),
                    })
                }
            };

            let direction = match chunk[1].as_str().and_then(Direction::from_name) {
                Some(direction) => direction,
                None => {
                    return Err(Error::InvalidDirection {
                        position: position + 1,
                        found: chunk[1].to_string(),
                    })
                }
            };

            specs.push(RelationshipSpec {
                relationship_type,
                direction,
            });
        }
        Ok(specs)
    }
}

/// The assembled remote traversal request.
///
/// Built once per legacy call, handed to the executor unchanged, and
/// discarded after the single traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSpecification {
    pub order: TraversalOrder,

    pub uniqueness: Uniqueness,

    /// Max depth or prune script; every bridged call sets exactly one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<DepthControl>,

    /// Remote result filter, when filtering happens remotely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterSpec>,

    pub relationships: Vec<RelationshipSpec>,
}

impl TraversalSpecification {
    /// A specification with the fixed global-node uniqueness and nothing
    /// else decided yet
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            uniqueness: Uniqueness::NodeGlobal,
            depth: None,
            filter: None,
            relationships: Vec::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.depth = Some(DepthControl::MaxDepth(max_depth));
        self
    }

    pub fn with_prune(mut self, prune: ScriptExpression) -> Self {
        self.depth = Some(DepthControl::Prune(prune));
        self
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_relationships(mut self, relationships: Vec<RelationshipSpec>) -> Self {
        self.relationships = relationships;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_list_valid_pairs() {
        let specs = RelationshipSpec::from_flat_list(&[
            json!("FOLLOWS"),
            json!("outgoing"),
            json!("KNOWS"),
            json!("both"),
        ])
        .unwrap();

        assert_eq!(
            specs,
            vec![
                RelationshipSpec::new("FOLLOWS", Direction::Outgoing),
                RelationshipSpec::new("KNOWS", Direction::Both),
            ]
        );
    }

    #[test]
    fn test_flat_list_empty() {
        let err = RelationshipSpec::from_flat_list(&[]).unwrap_err();
        assert!(matches!(err, Error::MalformedRelationshipList(0)));
    }

    #[test]
    fn test_flat_list_odd_length() {
        let err = RelationshipSpec::from_flat_list(&[json!("FOLLOWS")]).unwrap_err();
        assert!(matches!(err, Error::MalformedRelationshipList(1)));
    }

    #[test]
    fn test_flat_list_bad_type_position() {
        let err = RelationshipSpec::from_flat_list(&[
            json!("FOLLOWS"),
            json!("out"),
            json!(null),
            json!("in"),
        ])
        .unwrap_err();

        match err {
            Error::InvalidRelationshipType { position, found } => {
                assert_eq!(position, 2);
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flat_list_empty_type_rejected() {
        let err = RelationshipSpec::from_flat_list(&[json!(""), json!("out")]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRelationshipType { position: 0, .. }
        ));
    }

    #[test]
    fn test_flat_list_bad_direction_position() {
        let err =
            RelationshipSpec::from_flat_list(&[json!("FOLLOWS"), json!("sideways")]).unwrap_err();

        match err {
            Error::InvalidDirection { position, found } => {
                assert_eq!(position, 1);
                assert_eq!(found, "\"sideways\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flat_list_non_string_direction() {
        let err = RelationshipSpec::from_flat_list(&[json!("FOLLOWS"), json!(3)]).unwrap_err();
        assert!(matches!(err, Error::InvalidDirection { position: 1, .. }));
    }

    #[test]
    fn test_filter_resolution_builtins() {
        assert_eq!(
            FilterSpec::resolve("builtin", "all"),
            Some(FilterSpec::Builtin(BuiltinFilter::All))
        );
        assert_eq!(
            FilterSpec::resolve("BUILTIN", "All_But_Start_Node"),
            Some(FilterSpec::Builtin(BuiltinFilter::AllButStartNode))
        );
        assert_eq!(FilterSpec::resolve("builtin", "every_other_node"), None);
    }

    #[test]
    fn test_filter_resolution_script() {
        assert_eq!(
            FilterSpec::resolve("javascript", "position.length() < 3;"),
            Some(FilterSpec::Script(ScriptExpression::new(
                "javascript",
                "position.length() < 3;"
            )))
        );
    }

    #[test]
    fn test_specification_builders() {
        let spec = TraversalSpecification::new(TraversalOrder::DepthFirst)
            .with_max_depth(4)
            .with_filter(FilterSpec::Builtin(BuiltinFilter::All))
            .with_relationships(vec![RelationshipSpec::new("FOLLOWS", Direction::Outgoing)]);

        assert_eq!(spec.order, TraversalOrder::DepthFirst);
        assert_eq!(spec.uniqueness, Uniqueness::NodeGlobal);
        assert_eq!(spec.depth, Some(DepthControl::MaxDepth(4)));
        assert_eq!(spec.filter, Some(FilterSpec::Builtin(BuiltinFilter::All)));
        assert_eq!(spec.relationships.len(), 1);
    }

    #[test]
    fn test_prune_replaces_depth() {
        let spec = TraversalSpecification::new(TraversalOrder::BreadthFirst)
            .with_prune(ScriptExpression::new("javascript", "position.length() > 2;"));

        assert!(matches!(spec.depth, Some(DepthControl::Prune(_))));
    }
}
