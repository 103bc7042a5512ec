pub mod database;

pub use database::mongodb::MongoDbClient;
