//! `ride-map` — viewport geometry for the ride screens.
//!
//! Given the markers on screen (and optionally how much of the screen a
//! bottom panel covers), compute the camera region that frames them.  Every
//! computation is a pure function of its inputs; [`MapFramer`] only stores
//! the latest inputs and re-runs the fitter from scratch whenever one
//! changes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`region`] | `Region`, `Viewport`, `Framing`, `Visibility`               |
//! | [`config`] | `FitConfig`                                                 |
//! | [`fit`]    | `RegionFitter`                                              |
//! | [`framer`] | `RegionObserver` trait, `MapFramer`, `NoopObserver`         |
//! | [`sheet`]  | `BottomSheet`, `SheetConfig`, `Detent`                      |
//! | [`error`]  | `MapError`, `MapResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod config;
pub mod error;
pub mod fit;
pub mod framer;
pub mod region;
pub mod sheet;


pub use config::FitConfig;
pub use error::{MapError, MapResult};
pub use fit::RegionFitter;
pub use framer::{MapFramer, NoopObserver, RegionObserver};
pub use region::{Framing, Region, Viewport, Visibility};
pub use sheet::{BottomSheet, Detent, SheetConfig};
