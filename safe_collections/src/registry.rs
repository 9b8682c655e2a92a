use hashbrown::HashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::{type_name, Any, TypeId};

/// Any type with a canonical empty instance that can be shared between threads.
///
/// Implemented for every `Default + Send + Sync + 'static` type,
/// which includes all standard collections of such elements.
/// Non-collection types qualify too, in which case the "empty" instance is simply
/// `Default::default()` (`0` for integers, `""` for `String`, and so on).
pub trait CanonicalEmpty: Default + Send + Sync + 'static {}

impl<T: Default + Send + Sync + 'static> CanonicalEmpty for T {}

type Registry = HashMap<TypeId, &'static (dyn Any + Send + Sync)>;

/// The canonical empty instance of each type requested so far, keyed by its `TypeId`.
///
/// Entries are leaked on creation and never removed,
/// so there is at most one allocation per concrete type for the life of the process.
static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Get the shared empty (default) instance of `C`.
///
/// The first call for a given `C` creates the instance;
/// every call after that (from any thread) returns a reference to the same one.
/// Only shared references are ever handed out,
/// so for a collection the instance stays empty forever.
///
/// `C::default()` is called while the registry is locked,
/// so it must not itself call `canonical_empty`.
pub fn canonical_empty<C: CanonicalEmpty>() -> &'static C {
    let id = TypeId::of::<C>();

    let existing = REGISTRY.read().get(&id).copied();
    if let Some(empty) = existing.and_then(|empty| empty.downcast_ref::<C>()) {
        return empty;
    }

    let mut registry = REGISTRY.write();

    // Another thread may have won the race for the write lock.
    if let Some(empty) = registry
        .get(&id)
        .copied()
        .and_then(|empty| empty.downcast_ref::<C>())
    {
        return empty;
    }

    let empty: &'static C = Box::leak(Box::new(C::default()));
    registry.insert(id, empty);
    drop(registry);

    log::debug!("created canonical empty `{}`", type_name::<C>());
    empty
}
