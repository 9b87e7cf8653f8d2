//! Behaviour tests for the entity façade over an audited in-memory store.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use commons::domain::ports::{EntityStore, FixedAuditor};
use commons::domain::{Book, EntityFacade, EntityService, Outcome};
use commons::outbound::store::{AuditingStore, InMemoryEntityStore};
use commons::test_support::{SteppingClock, fixed_instant};
use futures::executor::block_on;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use uuid::Uuid;

struct FacadeWorld {
    clock: Arc<SteppingClock>,
    facade: EntityFacade<Book>,
    stored: Option<Book>,
    outcome: Option<&'static str>,
    created_at: Option<DateTime<Utc>>,
    revised: Option<Book>,
}

impl FacadeWorld {
    fn new() -> Self {
        let clock = Arc::new(SteppingClock::new(fixed_instant()));
        let store: Arc<dyn EntityStore<Book>> = Arc::new(AuditingStore::<Book, String>::new(
            Arc::new(InMemoryEntityStore::<Book>::new()),
            Arc::new(FixedAuditor::new("librarian".to_owned())),
            Arc::clone(&clock) as Arc<dyn mockable::Clock>,
        ));
        Self {
            clock,
            facade: EntityFacade::new(EntityService::new(store)),
            stored: None,
            outcome: None,
            created_at: None,
            revised: None,
        }
    }

    fn record<T>(&mut self, outcome: &Outcome<T>) {
        self.outcome = Some(match outcome {
            Outcome::Created(_) => "created",
            Outcome::Ok(_) => "ok",
            Outcome::NoContent => "no content",
            Outcome::NotFound => "not found",
        });
    }

    fn count(&self) -> u64 {
        block_on(self.facade.service().count()).expect("count")
    }
}

#[fixture]
fn world() -> Mutex<FacadeWorld> {
    Mutex::new(FacadeWorld::new())
}

#[given("an empty book store")]
fn empty_store(world: &Mutex<FacadeWorld>) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.count(), 0);
}

#[given("a store holding the book Dune")]
fn store_with_dune(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    let outcome = block_on(world.facade.create(Book::new("Dune", "Frank Herbert"))).expect("create");
    let book = outcome.into_value().expect("created book");
    world.created_at = book.audit.created_at();
    world.stored = Some(book);
}

#[when("a book titled Dune is created")]
fn create_dune(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    let outcome = block_on(world.facade.create(Book::new("Dune", "Frank Herbert"))).expect("create");
    world.record(&outcome);
}

#[when("an unknown book is requested")]
fn request_unknown(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    let outcome = block_on(world.facade.get_by_id(Uuid::new_v4())).expect("get");
    world.record(&outcome);
}

#[when("an unknown book is updated")]
fn update_unknown(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    let id = Uuid::new_v4();
    let outcome =
        block_on(world.facade.update(id, Book::with_id(id, "Ghost", "Nobody"))).expect("update");
    world.record(&outcome);
}

#[when("the stored book is deleted")]
fn delete_stored(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    let id = world.stored.as_ref().expect("stored book").id;
    let outcome = block_on(world.facade.delete(id)).expect("delete");
    world.record(&outcome);
}

#[when("the clock advances and the stored book is renamed")]
fn rename_stored(world: &Mutex<FacadeWorld>) {
    let mut world = world.lock().expect("world lock");
    world.clock.advance(Duration::minutes(30));
    let mut revision = world.stored.clone().expect("stored book");
    revision.title = "Dune Messiah".to_owned();
    let outcome = block_on(world.facade.update(revision.id, revision)).expect("update");
    world.record(&outcome);
    world.revised = outcome.into_value();
}

#[then("the outcome is created")]
fn outcome_created(world: &Mutex<FacadeWorld>) {
    assert_eq!(world.lock().expect("world lock").outcome, Some("created"));
}

#[then("the outcome is not found")]
fn outcome_not_found(world: &Mutex<FacadeWorld>) {
    assert_eq!(world.lock().expect("world lock").outcome, Some("not found"));
}

#[then("the outcome is no content")]
fn outcome_no_content(world: &Mutex<FacadeWorld>) {
    assert_eq!(world.lock().expect("world lock").outcome, Some("no content"));
}

#[then("the store holds one book")]
fn store_holds_one(world: &Mutex<FacadeWorld>) {
    assert_eq!(world.lock().expect("world lock").count(), 1);
}

#[then("the store is empty")]
fn store_is_empty(world: &Mutex<FacadeWorld>) {
    assert_eq!(world.lock().expect("world lock").count(), 0);
}

#[then("the creation time is unchanged")]
fn creation_unchanged(world: &Mutex<FacadeWorld>) {
    let world = world.lock().expect("world lock");
    let revised = world.revised.as_ref().expect("revised book");
    assert_eq!(revised.title, "Dune Messiah");
    assert_eq!(revised.audit.created_at(), world.created_at);
    assert_eq!(
        revised.audit.created_by().map(String::as_str),
        Some("librarian")
    );
}

#[then("the modification time moved forward")]
fn modification_moved(world: &Mutex<FacadeWorld>) {
    let world = world.lock().expect("world lock");
    let revised = world.revised.as_ref().expect("revised book");
    assert_eq!(
        revised.audit.updated_at(),
        Some(fixed_instant() + Duration::minutes(30))
    );
}

#[scenario(path = "tests/features/entity_facade.feature")]
fn entity_facade(world: Mutex<FacadeWorld>) {
    drop(world);
}
