// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Laminate Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Laminate thickness and resin mass calculations.
//!
//! - `formulas`: closed-form thickness and resin mass
//! - `sweep`: curves over V_f or ply count with a highlighted current point
//! - `plot`: axis hints for plotting front-ends
//! - `readout`: rounded numeric display values
//! - `materials`: fiber density presets
//! - `evaluate`: one stateless recompute per input change

pub mod evaluate;
pub mod formulas;
pub mod materials;
pub mod plot;
pub mod readout;
pub mod sweep;

pub use evaluate::{evaluate_config, evaluate_grammage_method, evaluate_mass_method, Evaluation};
pub use formulas::{resin_mass, thickness_from_grammage, thickness_from_mass, CompositeVolume};
pub use materials::FiberMaterial;
