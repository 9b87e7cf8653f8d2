//! Entity contract shared by stores, services and HTTP handlers.

use std::fmt;
use std::hash::Hash;

/// Typed record addressed by a unique identifier.
///
/// Identifier uniqueness within a store is the only constraint the generic
/// building blocks rely on. The ordering bound lets stores enumerate entities
/// deterministically.
///
/// # Examples
/// ```
/// use commons::domain::Entity;
///
/// #[derive(Debug, Clone)]
/// struct Tag {
///     slug: String,
/// }
///
/// impl Entity for Tag {
///     type Id = String;
///
///     fn id(&self) -> &Self::Id {
///         &self.slug
///     }
/// }
/// ```
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type.
    type Id: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Identifier of this record.
    fn id(&self) -> &Self::Id;
}
