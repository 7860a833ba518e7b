mod context;
pub mod figures;
pub mod init;
pub mod rank;
pub mod table;
pub mod validate;

pub use figures::{run_figures, run_figures_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rank::{run_rank, run_rank_impl};
pub use table::{run_table, run_table_impl};
pub use validate::{run_validate, run_validate_impl};
