mod dataset;
mod derive;
mod model;
mod prisma;
mod reference;
mod validation;

pub use dataset::ReviewDataset;
pub use derive::{
    GrowthBand, YearTotals, derived_growth, derived_percent, rank_by_count, rank_by_growth,
    top_by_growth, total, year_totals,
};
pub use model::{ClusterRecord, ReviewCorpus, StudyPeriod};
pub use prisma::PrismaFlow;
pub use reference::{REFERENCE_TOTAL_DOCUMENTS, reference_corpus, reference_prisma};
pub use validation::{CheckOutcome, Invariant, Tolerances, ValidationReport, validate};
