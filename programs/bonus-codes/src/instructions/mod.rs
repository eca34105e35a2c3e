pub use initialize_config::*;
pub mod initialize_config;

pub use update_config::*;
pub mod update_config;

pub use generate_bonus_code::*;
pub mod generate_bonus_code;

pub use set_code_status::*;
pub mod set_code_status;

pub use create_investor::*;
pub mod create_investor;

pub use purchase_tokens::*;
pub mod purchase_tokens;

pub use apply_bonus_code::*;
pub mod apply_bonus_code;

pub use check_bonus_history::*;
pub mod check_bonus_history;

pub use withdraw_treasury::*;
pub mod withdraw_treasury;
