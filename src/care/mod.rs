//! Care recommendations derived from taxonomy.
//!
//! Care is chosen by a **decision list**: an ordered table of rules, each a
//! keyword predicate over the lowercased family, genus and scientific name
//! paired with a complete care payload. The first rule that fires wins; if
//! none does, the default profile applies. Rules are never merged or scored
//! against each other.
//!
//! | # | Rule ID | Fires on |
//! |---|---------|----------|
//! | 1 | `succulent_cactus` | family `cactaceae`; genus `aloe`, `echeveria`; name `succulent` |
//! | 2 | `fern` | family `polypodiaceae`; genus `nephrolepis`; name `fern` |
//! | 3 | `snake_plant_dracaena` | genus `sansevieria`, `dracaena` |
//! | 4 | `pothos_philodendron` | genus `epipremnum`, `philodendron` |
//! | 5 | `rose` | genus `rosa`; name `rose` |
//! | 6 | `default` | always |

pub mod engine;
pub mod profile;
pub mod rules;

pub use engine::{derive_care_profile, CareRuleEngine};
pub use profile::CareProfile;
