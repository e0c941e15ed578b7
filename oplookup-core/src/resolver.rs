//! Coordinate resolution
//!
//! Turns `<vault>/<item>/<field>` plus an optional section hint into exactly
//! one field value. Vault and item are resolved through a [`SecretStore`];
//! section and field are resolved locally from the fetched item.
//!
//! Field labels are only unique within a section. Without a section hint the
//! first field in service order wins, so two sections carrying the same label
//! resolve to whichever the service listed first.

use tracing::{debug, info_span, Instrument};

use crate::coordinate::Coordinate;
use crate::error::{LookupError, LookupResult, Segment};
use crate::identifier::{labels_match, normalize_label, Reference};
use crate::models::{Field, Item, Section};
use crate::store::SecretStore;
use crate::tracing::span_names;

/// Resolves coordinates against a secret store
#[derive(Debug, Clone)]
pub struct CoordinateResolver<S> {
    store: S,
}

impl<S: SecretStore> CoordinateResolver<S> {
    /// Creates a resolver backed by `store`
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolves a coordinate string to a field value.
    ///
    /// # Errors
    ///
    /// - [`LookupError::MalformedCoordinate`] if the string has fewer than
    ///   three segments
    /// - [`LookupError::NotFound`] / [`LookupError::NoFields`] if any segment
    ///   cannot be resolved
    /// - [`LookupError::Transport`] if the store fails for any other reason
    pub async fn resolve(&self, coordinate: &str, section: Option<&str>) -> LookupResult<String> {
        let coordinate = Coordinate::parse(coordinate)?;
        self.resolve_coordinate(&coordinate, section).await
    }

    /// Resolves a batch of terms that must contain exactly one coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnsupportedBatch`] for more than one term, and
    /// otherwise the same errors as [`CoordinateResolver::resolve`].
    pub async fn resolve_terms<T: AsRef<str>>(
        &self,
        terms: &[T],
        section: Option<&str>,
    ) -> LookupResult<String> {
        let coordinate = Coordinate::from_terms(terms)?;
        self.resolve_coordinate(&coordinate, section).await
    }

    /// Resolves an already parsed coordinate.
    ///
    /// # Errors
    ///
    /// See [`CoordinateResolver::resolve`].
    pub async fn resolve_coordinate(
        &self,
        coordinate: &Coordinate,
        section: Option<&str>,
    ) -> LookupResult<String> {
        let span = info_span!(
            span_names::LOOKUP_RESOLVE,
            vault = %coordinate.vault,
            item = %coordinate.item,
            field = %coordinate.field,
            section = section.unwrap_or_default(),
        );
        async {
            let vault_id = self.resolve_vault(&coordinate.vault).await?;
            let item = self.resolve_item(&coordinate.item, &vault_id).await?;
            let field = find_field(&item, &coordinate.field, section)?;
            debug!(field_id = %field.id, "Field resolved");
            Ok(field.value.clone().unwrap_or_default())
        }
        .instrument(span)
        .await
    }

    async fn resolve_vault(&self, vault: &Reference) -> LookupResult<String> {
        match vault {
            Reference::Id(id) => Ok(id.clone()),
            Reference::Label(name) => self
                .store
                .get_vault_id_by_name(name)
                .await
                .map_err(|e| LookupError::from_client(e, Segment::Vault, name)),
        }
    }

    async fn resolve_item(&self, item: &Reference, vault_id: &str) -> LookupResult<Item> {
        let result = match item {
            Reference::Id(id) => self.store.get_item_by_id(id, vault_id).await,
            Reference::Label(name) => self.store.get_item_by_name(name, vault_id).await,
        };
        result.map_err(|e| LookupError::from_client(e, Segment::Item, item.as_str()))
    }
}

/// Finds the requested field in an item, optionally scoped to a section.
///
/// # Errors
///
/// Returns [`LookupError::NoFields`] if the item has no fields, and
/// [`LookupError::NotFound`] if the section or field cannot be matched.
pub fn find_field<'a>(
    item: &'a Item,
    field: &Reference,
    section: Option<&str>,
) -> LookupResult<&'a Field> {
    if item.fields.is_empty() {
        return Err(LookupError::NoFields(item.title.clone()));
    }

    let section_id = match section.filter(|s| !s.is_empty()) {
        Some(hint) => resolve_section_id(item, hint)?,
        None => None,
    };

    let matched = match field {
        Reference::Id(id) => scan_fields(&item.fields, section_id, |f| f.id == *id),
        Reference::Label(label) => {
            let wanted = normalize_label(label);
            scan_fields(&item.fields, section_id, |f| normalize_label(&f.label) == wanted)
        }
    };

    matched.ok_or_else(|| {
        LookupError::not_found_in(
            Segment::Field,
            field.as_str(),
            format!("in item '{}'", item.title),
        )
    })
}

/// Resolves a section hint to a section id.
///
/// Returns `Ok(None)` when the item has no sections at all: the lookup is
/// then unscoped. Identifier hints are used as given.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] if a label hint matches no section.
pub fn resolve_section_id<'a>(item: &'a Item, hint: &'a str) -> LookupResult<Option<&'a str>> {
    if item.sections.is_empty() {
        return Ok(None);
    }

    match Reference::classify(hint) {
        Reference::Id(_) => Ok(Some(hint)),
        Reference::Label(label) => find_section_by_label(&item.sections, &label)
            .map(|s| Some(s.id.as_str()))
            .ok_or_else(|| {
                LookupError::not_found_in(
                    Segment::Section,
                    label,
                    format!("in item '{}'", item.title),
                )
            }),
    }
}

fn find_section_by_label<'a>(sections: &'a [Section], label: &str) -> Option<&'a Section> {
    sections.iter().find(|s| labels_match(&s.label, label))
}

/// First field in list order that satisfies `matches` and, when a section
/// is given, belongs to it.
fn scan_fields<'a, F>(
    fields: &'a [Field],
    section_id: Option<&str>,
    matches: F,
) -> Option<&'a Field>
where
    F: Fn(&Field) -> bool,
{
    fields.iter().find(|f| match section_id {
        Some(section_id) => f.section_id() == Some(section_id) && matches(f),
        None => matches(f),
    })
}
