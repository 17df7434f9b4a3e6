mod health;
mod records;

pub use health::health_handler;
pub use records::{
    create_record_handler, delete_record_handler, get_record_handler, list_records_handler,
    update_record_handler,
};
