//! Python bindings for the War engine.
//!
//! # Quick Start
//!
//! ```python
//! import war_engine
//!
//! # Winner of the fixed prediction decks
//! war_engine.predict_reference(seed=42)   # "p1" or "p2"
//!
//! # Any two integer decks, top card first
//! war_engine.predict_winner([9, 2], [3, 5], seed=7)
//!
//! # Win counts over many independent games
//! wins_a, wins_b = war_engine.simulate([9, 2], [3, 5], games=1000, seed=1)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Side, WarConfig, WarError};
use crate::simulation::simulate_many;

fn to_py_err(err: WarError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn play(mut config: WarConfig<i64>, seed: Option<u64>) -> PyResult<&'static str> {
    config.seed = seed;
    let outcome = config.build().and_then(|mut game| game.run()).map_err(to_py_err)?;
    Ok(outcome.winner.wire_id())
}

/// Play one game and return the winner's id (`"p1"` or `"p2"`).
#[pyfunction]
#[pyo3(signature = (deck_a, deck_b, seed=None))]
fn predict_winner(deck_a: Vec<i64>, deck_b: Vec<i64>, seed: Option<u64>) -> PyResult<&'static str> {
    play(WarConfig::new(deck_a, deck_b), seed)
}

/// Play the fixed prediction decks and return the winner's id.
#[pyfunction]
#[pyo3(signature = (seed=None))]
fn predict_reference(seed: Option<u64>) -> PyResult<&'static str> {
    let reference = WarConfig::reference();
    let config = WarConfig::new(
        reference.deck_a.into_iter().map(i64::from).collect(),
        reference.deck_b.into_iter().map(i64::from).collect(),
    );
    play(config, seed)
}

/// Play `games` independent games and return `(wins_a, wins_b)`.
#[pyfunction]
#[pyo3(signature = (deck_a, deck_b, games, seed=None))]
fn simulate(
    py: Python<'_>,
    deck_a: Vec<i64>,
    deck_b: Vec<i64>,
    games: u32,
    seed: Option<u64>,
) -> PyResult<(u32, u32)> {
    let mut config = WarConfig::new(deck_a, deck_b);
    config.seed = seed;
    let summary = py
        .allow_threads(|| simulate_many(&config, games))
        .map_err(to_py_err)?;
    Ok((summary.wins[Side::A], summary.wins[Side::B]))
}

/// war_engine: deterministic War game prediction.
#[pymodule]
fn war_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(predict_winner, m)?)?;
    m.add_function(wrap_pyfunction!(predict_reference, m)?)?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    Ok(())
}
