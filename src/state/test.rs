use crate::state::*;
use crate::transport::{TransportMode, MODES, MODE_COUNT};

#[test]
fn encode_decode_is_consistent() {
    for vertex in 0..16 {
        for mode in MODES {
            let state = State::encode(vertex, mode);
            assert_eq!(state.vertex(), vertex);
            assert_eq!(state.mode(), mode);
            assert_eq!(state.decode(), (vertex, mode));
        }
    }
}

#[test]
fn every_index_round_trips() {
    const VERTICES: usize = 7;

    let states = State::all(VERTICES).collect::<Vec<_>>();
    assert_eq!(states.len(), state_count(VERTICES));

    for (index, state) in states.into_iter().enumerate() {
        assert_eq!(state.index(), index);
        assert_eq!(State::encode(state.vertex(), state.mode()), state);
        assert_eq!(State::from_index(index, VERTICES), Some(state));
    }
}

#[test]
fn from_index_rejects_outside_space() {
    assert_eq!(State::from_index(state_count(2), 2), None);
    assert_eq!(State::from_index(0, 0), None);
}

#[test]
fn layout_is_vertex_major() {
    assert_eq!(State::encode(0, TransportMode::Bus).index(), 0);
    assert_eq!(State::encode(0, TransportMode::Feet).index(), 2);
    assert_eq!(State::encode(1, TransportMode::Bus).index(), MODE_COUNT);
    assert_eq!(State::encode(3, TransportMode::Car).to_string(), "(3, car)");
}
