//! Dynamic field shaping.
//!
//! Reduces fully-populated DTOs to the subset of fields a client asked
//! for via the `fields` query parameter. Each shapeable type declares a
//! static schema mapping field names to accessor functions, so the known
//! field set is an explicit artifact instead of a reflection result.

use serde_json::Value;

/// Insertion-ordered name/value subset of a source record.
pub type ShapedEntity = serde_json::Map<String, Value>;

/// One entry of a type's shaping schema: a canonical field name and the
/// accessor producing its JSON value.
pub struct FieldSpec<T> {
    pub name: &'static str,
    pub get: fn(&T) -> Value,
}

/// Types that can be projected down to a client-chosen set of fields.
/// The `'static` bound follows from the schema living in static memory.
pub trait Shapeable: Sized + 'static {
    /// The declared field set, in natural output order.
    fn schema() -> &'static [FieldSpec<Self>];
}

/// Resolves a raw comma-separated field list against the schema of `T`.
///
/// Tokens are trimmed, empty tokens dropped, duplicates collapsed to the
/// first occurrence and matched case-insensitively. Unknown names are
/// silently ignored so a client typo narrows the output instead of
/// failing the request. An absent or blank list selects the full schema.
pub fn resolve_fields<T: Shapeable>(requested: Option<&str>) -> Vec<&'static FieldSpec<T>> {
    let schema = T::schema();

    let Some(requested) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
        return schema.iter().collect();
    };

    let mut fields: Vec<&'static FieldSpec<T>> = Vec::new();
    for token in requested.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(spec) = schema.iter().find(|s| s.name.eq_ignore_ascii_case(token))
            && !fields.iter().any(|f| f.name == spec.name)
        {
            fields.push(spec);
        }
    }
    fields
}

/// Shapes a sequence of records down to the requested fields.
///
/// Returns a lazy iterator: records are projected one at a time in their
/// original order, with no buffering beyond the resolved field list.
pub fn shape<T, I>(records: I, requested: Option<&str>) -> impl Iterator<Item = ShapedEntity>
where
    T: Shapeable,
    I: IntoIterator<Item = T>,
{
    let fields = resolve_fields::<T>(requested);

    records.into_iter().map(move |record| {
        let mut shaped = ShapedEntity::new();
        for spec in &fields {
            shaped.insert(spec.name.to_string(), (spec.get)(&record));
        }
        shaped
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::employee::EmployeeDto;

    fn sample() -> EmployeeDto {
        EmployeeDto {
            id: 1,
            name: "Alice".to_string(),
            age: 30,
            position: "Engineer".to_string(),
        }
    }

    fn keys(shaped: &ShapedEntity) -> Vec<&str> {
        shaped.keys().map(String::as_str).collect()
    }

    #[test]
    fn absent_field_list_selects_the_full_schema_in_order() {
        let shaped: Vec<_> = shape(vec![sample()], None).collect();
        assert_eq!(keys(&shaped[0]), vec!["id", "name", "age", "position"]);
    }

    #[test]
    fn blank_field_list_selects_the_full_schema() {
        let shaped: Vec<_> = shape(vec![sample()], Some("   ")).collect();
        assert_eq!(keys(&shaped[0]), vec!["id", "name", "age", "position"]);
    }

    #[test]
    fn requested_fields_come_back_in_requested_order() {
        let shaped: Vec<_> = shape(vec![sample()], Some("name,age")).collect();
        assert_eq!(keys(&shaped[0]), vec!["name", "age"]);
        assert_eq!(shaped[0]["name"], "Alice");
        assert_eq!(shaped[0]["age"], 30);
    }

    #[test]
    fn unknown_names_are_dropped_silently() {
        let shaped: Vec<_> = shape(vec![sample()], Some("name,unknownField")).collect();
        assert_eq!(keys(&shaped[0]), vec!["name"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_duplicates_collapse() {
        let shaped: Vec<_> = shape(vec![sample()], Some(" NAME , name ,AGE ")).collect();
        assert_eq!(keys(&shaped[0]), vec!["name", "age"]);
    }

    #[test]
    fn only_unknown_names_yield_empty_records() {
        let shaped: Vec<_> = shape(vec![sample()], Some("nope,alsono")).collect();
        assert!(shaped[0].is_empty());
    }

    #[test]
    fn shaping_preserves_record_order() {
        let records = vec![
            EmployeeDto {
                id: 1,
                name: "A".to_string(),
                age: 20,
                position: "X".to_string(),
            },
            EmployeeDto {
                id: 2,
                name: "B".to_string(),
                age: 45,
                position: "Y".to_string(),
            },
        ];
        let shaped: Vec<_> = shape(records, Some("id")).collect();
        assert_eq!(shaped[0]["id"], 1);
        assert_eq!(shaped[1]["id"], 2);
    }

    #[test]
    fn shaping_twice_with_the_same_request_is_identical() {
        let first: Vec<_> = shape(vec![sample()], Some("name,age")).collect();
        let second: Vec<_> = shape(vec![sample()], Some("name,age")).collect();
        assert_eq!(first, second);
    }
}
