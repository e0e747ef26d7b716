//! Orbitfolio, an animated 3D project showcase.
//!
//! Project planets orbit a central sun, tech satellites orbit their
//! planet, and clicking a planet converges the camera on it and opens
//! a briefing panel. The orbital math is a pure function of scene time
//! in [`orbit`]; selection and camera smoothing live in [`focus`].

pub mod focus;
pub mod input;
pub mod orbit;
pub mod scene;
pub mod showcase;
pub mod ui;
