//! Decoding of layout input.
//!
//! Two JSON shapes are accepted:
//!
//! - a flat array of [`DomainRecord`]s, ready for layout, and
//! - an array of [`DomainSource`]s, each domain carrying its sub-domains
//!   inline, as returned by the domain service.
//!
//! Nested input is flattened with [`flatten_domains`], which moves every
//! sub-domain id into the negative id range so it cannot collide with a
//! domain id.

use serde::Deserialize;

use arbor_core::{identifier::NodeId, record::DomainRecord};

use crate::error::ArborError;

/// A domain as returned by the domain service, sub-domains inline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSource {
    pub id: i64,

    #[serde(default)]
    pub parent_id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub sub_domains: Vec<SubDomainSource>,
}

/// A sub-domain nested inside its owning [`DomainSource`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDomainSource {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub code: Option<String>,
}

/// Decodes a JSON array of flat records.
///
/// # Errors
///
/// Returns [`ArborError::Decode`] carrying `src` when the text is not a
/// valid record array.
pub fn parse_records(src: &str) -> Result<Vec<DomainRecord>, ArborError> {
    serde_json::from_str(src).map_err(|err| ArborError::new_decode_error(err, src))
}

/// Decodes a JSON array of nested domains.
///
/// # Errors
///
/// Returns [`ArborError::Decode`] carrying `src` when the text is not a
/// valid domain array.
pub fn parse_domains(src: &str) -> Result<Vec<DomainSource>, ArborError> {
    serde_json::from_str(src).map_err(|err| ArborError::new_decode_error(err, src))
}

/// Flattens nested domains into records.
///
/// Each domain is followed by its sub-domains. A sub-domain's id is
/// remapped with [`NodeId::from_sub_domain`] and its parent is the owning
/// domain. The domain's `child_count_hint` is its sub-domain count.
///
/// # Examples
///
/// ```
/// use arbor::input::{DomainSource, SubDomainSource, flatten_domains};
/// use arbor_core::identifier::NodeId;
///
/// let domains = vec![DomainSource {
///     id: 1,
///     parent_id: None,
///     name: "Finance".to_string(),
///     code: None,
///     sub_domains: vec![SubDomainSource { id: 1, name: "Ledger".to_string(), code: None }],
/// }];
///
/// let records = flatten_domains(&domains);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].unique_id, NodeId::new(-2));
/// assert_eq!(records[1].parent_id, Some(NodeId::new(1)));
/// ```
pub fn flatten_domains(domains: &[DomainSource]) -> Vec<DomainRecord> {
    let capacity = domains.iter().map(|d| 1 + d.sub_domains.len()).sum();
    let mut records = Vec::with_capacity(capacity);

    for domain in domains {
        let domain_id = NodeId::new(domain.id);
        let hint = u32::try_from(domain.sub_domains.len()).unwrap_or(u32::MAX);

        records.push(DomainRecord {
            unique_id: domain_id,
            parent_id: domain.parent_id.map(NodeId::new),
            label: domain.name.clone(),
            code: domain.code.clone(),
            child_count_hint: Some(hint),
        });

        records.extend(domain.sub_domains.iter().map(|sub| DomainRecord {
            unique_id: NodeId::from_sub_domain(sub.id),
            parent_id: Some(domain_id),
            label: sub.name.clone(),
            code: sub.code.clone(),
            child_count_hint: None,
        }));
    }

    records
}
