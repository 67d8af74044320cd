use log::info;

use crate::structs::category::Category;

use super::store::{CategoryStore, StoreError};

const CATEGORY_KEY_PREFIX: &str = "categories:";

pub enum Database {
    Category = 0,
}

#[derive(Clone)]
pub struct RedisService {
    pub client: redis::Client,
}

pub fn get_redis_service(redis_url: Option<&str>) -> Result<RedisService, StoreError> {
    if let Some(redis_domain) = redis_url {
        let redis_service = RedisService {
            client: redis::Client::open(redis_domain)?,
        };

        return Ok(redis_service);
    }

    Err(StoreError::RedisUrlMissing)
}

pub fn category_key(user_id: &str) -> String {
    format!("{}{}", CATEGORY_KEY_PREFIX, user_id)
}

impl RedisService {
    fn get_connection(&self) -> Result<redis::Connection, StoreError> {
        let mut con = self.client.get_connection()?;

        // Make the current connection connect to the category database
        redis::cmd("SELECT")
            .arg(Database::Category as u8)
            .query::<()>(&mut con)?;

        Ok(con)
    }

    pub fn store_categories(&self, user_id: &str, categories: &[Category]) -> Result<(), StoreError> {
        let mut con = self.get_connection()?;
        let json = serde_json::to_string(categories)?;

        redis::cmd("SET")
            .arg(category_key(user_id))
            .arg(json)
            .query::<()>(&mut con)?;

        info!("Stored {} categories for {}", categories.len(), user_id);

        Ok(())
    }
}

impl CategoryStore for RedisService {
    fn fetch_categories(&self, user_id: &str) -> Result<Vec<Category>, StoreError> {
        let mut con = self.get_connection()?;

        let json: Option<String> = redis::cmd("GET").arg(category_key(user_id)).query(&mut con)?;

        match json {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(vec![]),
        }
    }
}
