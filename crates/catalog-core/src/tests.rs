//! Unit tests for the validation handlers and both aggregates.

use std::{thread, time::Duration};

use crate::{
  Error,
  category::{Category, CategoryId},
  genre::{Genre, GenreId},
  validation::{
    Notification, ThrowsValidationHandler, ValidationError, ValidationHandler,
  },
};

/// Sleep long enough for `Utc::now()` to move forward.
fn tick() { thread::sleep(Duration::from_millis(2)); }

fn name(s: &str) -> Option<String> { Some(s.to_owned()) }

fn messages(errors: &[ValidationError]) -> Vec<&str> {
  errors.iter().map(ValidationError::message).collect()
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[test]
fn notification_keeps_insertion_order_and_duplicates() {
  let mut n = Notification::create();
  assert!(!n.has_error());

  n.append(ValidationError::new("b")).unwrap();
  n.append(ValidationError::new("a")).unwrap();
  n.append(ValidationError::new("b")).unwrap();

  assert!(n.has_error());
  assert_eq!(messages(n.errors()), ["b", "a", "b"]);
  assert_eq!(n.first_error().unwrap().message(), "b");
}

#[test]
fn notification_merges_another_handler() {
  let mut first = Notification::from(ValidationError::new("one"));
  let mut second = Notification::create();
  second.append(ValidationError::new("two")).unwrap();
  second.append(ValidationError::new("three")).unwrap();

  first.append_all(&second).unwrap();
  assert_eq!(messages(first.errors()), ["one", "two", "three"]);
}

#[test]
fn notification_validate_absorbs_failures() {
  let mut n = Notification::create();

  let ok = n.validate(|| Ok(7)).unwrap();
  assert_eq!(ok, Some(7));
  assert!(!n.has_error());

  let failed: Option<()> = n
    .validate(|| Err(Error::not_found("Category", "123")))
    .unwrap();
  assert!(failed.is_none());
  assert_eq!(messages(n.errors()), ["Category with id 123 was not found"]);
}

#[test]
fn notification_validate_unpacks_carried_errors() {
  let mut n = Notification::create();
  let carried = Error::Notification {
    message: "outer".into(),
    errors:  vec![ValidationError::new("x"), ValidationError::new("y")],
  };
  let _: Option<()> = n.validate(|| Err(carried)).unwrap();
  assert_eq!(messages(n.errors()), ["x", "y"]);
}

#[test]
fn throws_handler_fails_on_first_append() {
  let mut h = ThrowsValidationHandler;
  let err = h.append(ValidationError::new("boom")).unwrap_err();
  assert_eq!(err, Error::Validation(vec![ValidationError::new("boom")]));
  assert!(!h.has_error());
}

#[test]
fn throws_handler_fails_with_all_merged_errors() {
  let mut other = Notification::create();
  other.append(ValidationError::new("a")).unwrap();
  other.append(ValidationError::new("b")).unwrap();

  let err = ThrowsValidationHandler.append_all(&other).unwrap_err();
  assert_eq!(messages(&err.errors()), ["a", "b"]);
  assert_eq!(err.to_string(), "a; b");
}

#[test]
fn throws_handler_validate_passes_success_through() {
  let mut h = ThrowsValidationHandler;
  assert_eq!(h.validate(|| Ok("fine")).unwrap(), Some("fine"));

  let err = h
    .validate(|| -> crate::Result<()> { Err(Error::not_found("Genre", "9")) })
    .unwrap_err();
  assert_eq!(messages(&err.errors()), ["Genre with id 9 was not found"]);
}

#[test]
fn throws_handler_validate_reports_failure_message_only() {
  let mut h = ThrowsValidationHandler;

  let err = h.validate(|| Genre::new_genre(name(" "), true)).unwrap_err();
  assert_eq!(err, Error::Validation(vec![ValidationError::new(
    "Failed to create a Aggregate Genre"
  )]));

  let carried = Error::Notification {
    message: "outer".into(),
    errors:  vec![ValidationError::new("x"), ValidationError::new("y")],
  };
  let err = h.validate(|| -> crate::Result<()> { Err(carried) }).unwrap_err();
  assert_eq!(messages(&err.errors()), ["outer"]);
}

#[test]
fn error_equality_is_by_message() {
  assert_eq!(ValidationError::new("same"), ValidationError::new("same"));
  assert_ne!(ValidationError::new("same"), ValidationError::new("other"));
}

// ─── Category ────────────────────────────────────────────────────────────────

#[test]
fn new_category_active_has_no_deleted_at() {
  let c = Category::new_category(
    name("Filmes"),
    name("A categoria mais assistida"),
    true,
  );
  assert!(!c.id().as_str().is_empty());
  assert_eq!(c.name(), Some("Filmes"));
  assert_eq!(c.description(), Some("A categoria mais assistida"));
  assert!(c.is_active());
  assert_eq!(c.created_at(), c.updated_at());
  assert!(c.deleted_at().is_none());
}

#[test]
fn new_category_inactive_is_stamped_deleted() {
  let c = Category::new_category(name("Filmes"), None, false);
  assert!(!c.is_active());
  assert!(c.deleted_at().is_some());
}

#[test]
fn new_categories_get_distinct_ids() {
  let a = Category::new_category(name("Filmes"), None, true);
  let b = Category::new_category(name("Filmes"), None, true);
  assert_ne!(a.id(), b.id());
}

fn category_error(n: Option<String>) -> Vec<ValidationError> {
  let c = Category::new_category(n, None, true);
  let mut notification = Notification::create();
  c.validate(&mut notification).unwrap();
  notification.into_errors()
}

#[test]
fn category_null_name_yields_one_error() {
  assert_eq!(messages(&category_error(None)), ["'name' must not be null"]);
}

#[test]
fn category_blank_name_yields_one_error() {
  assert_eq!(messages(&category_error(name("   "))), [
    "'name' must not be empty"
  ]);
}

#[test]
fn category_name_length_bounds() {
  let msg = "'name' must be between 3 and 255 characters";
  assert_eq!(messages(&category_error(name("Fi "))), [msg]);
  assert_eq!(messages(&category_error(name(&"x".repeat(256)))), [msg]);
  assert!(category_error(name("Fil")).is_empty());
  assert!(category_error(name(&"x".repeat(255))).is_empty());
}

#[test]
fn category_validate_with_throws_handler_fails_fast() {
  let c = Category::new_category(None, None, true);
  let err = c.validate(&mut ThrowsValidationHandler).unwrap_err();
  assert_eq!(err.to_string(), "'name' must not be null");
}

#[test]
fn category_deactivate_twice_keeps_deleted_at() {
  let c = Category::new_category(name("Filmes"), None, true);
  tick();
  let c = c.deactivate();
  let deleted_at = c.deleted_at().unwrap();
  let first_update = c.updated_at();

  tick();
  let c = c.deactivate();
  assert_eq!(c.deleted_at(), Some(deleted_at));
  assert!(c.updated_at() > first_update);
  assert!(!c.is_active());
}

#[test]
fn category_activate_clears_deleted_at() {
  let c = Category::new_category(name("Filmes"), None, false);
  let before = c.updated_at();
  tick();
  let c = c.activate();
  assert!(c.is_active());
  assert!(c.deleted_at().is_none());
  assert!(c.updated_at() > before);
}

#[test]
fn category_update_replaces_fields_without_validating() {
  let c = Category::new_category(name("Filmes"), None, true);
  let id = c.id().clone();
  let created_at = c.created_at();
  tick();

  let c = c.update(None, name("desc"), false);
  assert_eq!(c.id(), &id);
  assert_eq!(c.created_at(), created_at);
  assert!(c.name().is_none());
  assert_eq!(c.description(), Some("desc"));
  assert!(!c.is_active());
  assert!(c.deleted_at().is_some());
  assert!(c.updated_at() > created_at);
}

// ─── Genre ───────────────────────────────────────────────────────────────────

#[test]
fn new_genre_valid() {
  let g = Genre::new_genre(name("Ação"), true).unwrap();
  assert_eq!(g.name(), Some("Ação"));
  assert!(g.is_active());
  assert!(g.categories().is_empty());
  assert!(g.deleted_at().is_none());

  let g = Genre::new_genre(name("Ação"), false).unwrap();
  assert!(g.deleted_at().is_some());
}

#[test]
fn new_genre_rejects_invalid_names() {
  let cases = [
    (None, "'name' must not be null"),
    (name(" "), "'name' must not be empty"),
    (Some("x".repeat(256)), "'name' must be between 1 and 255 characters"),
  ];
  for (n, expected) in cases {
    let err = Genre::new_genre(n, true).unwrap_err();
    assert!(matches!(err, Error::Notification { .. }));
    assert_eq!(err.to_string(), "Failed to create a Aggregate Genre");
    assert_eq!(messages(&err.errors()), [expected]);
  }
}

#[test]
fn genre_single_character_name_is_valid() {
  assert!(Genre::new_genre(name("A"), true).is_ok());
}

#[test]
fn genre_with_validates_too() {
  let now = chrono::Utc::now();
  let err = Genre::with(GenreId::unique(), name(""), true, vec![], now, now, None)
    .unwrap_err();
  assert_eq!(messages(&err.errors()), ["'name' must not be empty"]);

  let g = Genre::with(
    GenreId::from("g1"),
    name("Drama"),
    true,
    vec![CategoryId::from("a"), CategoryId::from("a")],
    now,
    now,
    None,
  )
  .unwrap();
  assert_eq!(g.categories().len(), 2);
}

#[test]
fn genre_update_revalidates() {
  let g = Genre::new_genre(name("Ação"), true).unwrap();
  let err = g.update(name("  "), true, vec![]).unwrap_err();
  assert_eq!(messages(&err.errors()), ["'name' must not be empty"]);
}

#[test]
fn genre_update_applies_lifecycle_and_fields() {
  let g = Genre::new_genre(name("Ação"), true).unwrap();
  let created_at = g.created_at();
  tick();

  let ids = vec![CategoryId::from("b"), CategoryId::from("a")];
  let g = g.update(name("Drama"), false, ids.clone()).unwrap();
  assert_eq!(g.name(), Some("Drama"));
  assert!(!g.is_active());
  assert!(g.deleted_at().is_some());
  assert_eq!(g.categories(), ids.as_slice());
  assert!(g.updated_at() > created_at);

  let g = g.update(name("Drama"), true, vec![]).unwrap();
  assert!(g.is_active());
  assert!(g.deleted_at().is_none());
}

#[test]
fn genre_activate_clears_deleted_at() {
  let g = Genre::new_genre(name("Ação"), false).unwrap();
  assert!(g.deleted_at().is_some());
  let updated_at = g.updated_at();
  tick();

  let g = g.activate();
  assert!(g.is_active());
  assert!(g.deleted_at().is_none());
  assert!(g.updated_at() > updated_at);
}

#[test]
fn genre_name_accepts_upper_bound() {
  let long = "x".repeat(255);
  let g = Genre::new_genre(Some(long.clone()), true).unwrap();
  assert_eq!(g.name(), Some(long.as_str()));
}

#[test]
fn genre_deactivate_twice_keeps_deleted_at() {
  let g = Genre::new_genre(name("Ação"), true).unwrap().deactivate();
  let deleted_at = g.deleted_at();
  let updated_at = g.updated_at();
  tick();
  let g = g.deactivate();
  assert_eq!(g.deleted_at(), deleted_at);
  assert!(g.updated_at() > updated_at);
}

#[test]
fn genre_category_mutations() {
  let g = Genre::new_genre(name("Ação"), true).unwrap();
  let before = g.updated_at();
  tick();

  let g = g
    .add_category(Some(CategoryId::from("a")))
    .add_category(Some(CategoryId::from("b")))
    .add_category(Some(CategoryId::from("a")));
  assert_eq!(g.categories(), &[
    CategoryId::from("a"),
    CategoryId::from("b"),
    CategoryId::from("a")
  ]);
  assert!(g.updated_at() > before);

  let g = g.remove_category(Some(&CategoryId::from("a")));
  assert_eq!(g.categories(), &[CategoryId::from("b"), CategoryId::from("a")]);

  let g = g.add_categories(Some(vec![CategoryId::from("c")]));
  assert_eq!(g.categories().len(), 3);
}

#[test]
fn genre_null_category_mutations_are_noops() {
  let g = Genre::new_genre(name("Ação"), true).unwrap();
  let updated_at = g.updated_at();
  tick();

  let g = g
    .add_category(None)
    .remove_category(None)
    .add_categories(None)
    .add_categories(Some(vec![]));
  assert!(g.categories().is_empty());
  assert_eq!(g.updated_at(), updated_at);
}
