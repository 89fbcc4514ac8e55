pub mod cli;
pub mod config;
pub mod context;
pub mod detect;
pub mod eeat;
pub mod error;
pub mod extract;
pub mod howto;
pub mod normalize;
pub mod resolve;
pub mod schema;
pub mod signals;
pub mod structure;
pub mod validate;

pub use detect::{detect_entities, score_entities, DetectedEntity, EntityScore};
pub use eeat::{add_eeat_signals, EeatSignals};
pub use error::{LdgenError, Result};
pub use howto::{generate_howto_schema, HowToOptions};
pub use schema::{
    create_breadcrumb_schema, create_person_schema, generate_from_content, generate_schema,
    GeneratedSchema, PersonOptions, SchemaEntity,
};
pub use signals::EntityType;
pub use validate::{parse, round_trip, serialize, validate_round_trip, validate_schema};
