pub mod protparam;
pub mod traits;

pub use protparam::ProtParamAnalyzer;
pub use traits::ProteinAnalyzer;
