use crate::{
    event::{Event, Kind},
    pool::EventPool,
};

#[test]
fn acquire_without_release_grows_the_arena() {
    let mut pool = EventPool::new();
    let a = pool.acquire(Kind::Walkout);
    let b = pool.acquire(Kind::Walkout);
    assert_ne!(a, b);
    assert_eq!(pool.allocated(), 2);
    assert_eq!(pool.idle(), 0);
}

#[test]
fn release_then_acquire_reuses_the_slot() {
    let mut pool = EventPool::new();
    let a = pool.acquire(Kind::InternalArrival);
    pool.release(a);
    assert_eq!(pool.idle(), 1);

    let b = pool.acquire(Kind::InternalArrival);
    assert_eq!(a, b, "the free slot should be handed back out");
    assert_eq!(pool.allocated(), 1, "no new slot should have been allocated");
    assert_eq!(pool.idle(), 0);
}

#[test]
fn free_lists_are_independent_per_kind() {
    let mut pool = EventPool::new();
    let walkout = pool.acquire(Kind::Walkout);
    pool.release(walkout);

    // Acquiring a different kind must not be satisfied by the Walkout
    // free-list; it should allocate a fresh slot instead.
    let arrival = pool.acquire(Kind::ExternalArrival);
    assert_ne!(walkout, arrival);
    assert_eq!(pool.allocated(), 2);
}

#[test]
fn set_and_get_round_trip() {
    let mut pool = EventPool::new();
    let id = pool.acquire(Kind::Walkout);
    pool.set(id, Event { time: 12.5, station: 3, kind: Kind::Walkout });
    let e = pool.get(id);
    assert_eq!(e.time, 12.5);
    assert_eq!(e.station, 3);
    assert_eq!(e.kind, Kind::Walkout);
}
