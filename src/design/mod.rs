/// Filter design: request types, analog prototypes and the digital transform.
///
/// Architecture:
/// ```text
///   FilterSpec  (family, order, cutoff Hz, mode, fs)
///        │  normalize by Nyquist
///        ▼
///   ┌────────────┐
///   │ prototype  │  analog lowpass zpk, edge at 1 rad/s
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ transform  │  lp→lp/hp/bp/bs, bilinear, zpk → (b, a)
///   └────────────┘
///        │
///        ▼
///   FilterCoefficients
/// ```
pub mod designer;
pub mod elliptic;
pub mod error;
pub mod model;
pub mod prototype;
pub mod transform;

pub use designer::design_filter;
pub use model::{FilterCoefficients, FilterFamily, FilterMode, FilterSpec, DEFAULT_SAMPLE_RATE};
