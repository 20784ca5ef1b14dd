use crate::repository::{entity::ProfileEntity, Error, Profile, ProfilesRepository};
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const PROFILES: &str = "profiles";
const INDEX_NAME_UNIQUE_USER_ID: &str = "unique_user_id";

pub struct ProfilesRepositoryImpl {
    database: Database,
}

impl ProfilesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(PROFILES)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "user_id": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_UNIQUE_USER_ID.to_string())
                            .unique(true)
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(
            collection = PROFILES,
            index = INDEX_NAME_UNIQUE_USER_ID,
            "created index"
        );

        Ok(Self { database })
    }
}

#[async_trait]
impl ProfilesRepository for ProfilesRepositoryImpl {
    async fn find_profile(&self, user_id: i64) -> Result<Option<Profile>, Error> {
        let profile = self
            .database
            .collection::<ProfileEntity>(PROFILES)
            .find_one(doc! {
                "user_id": user_id,
            })
            .await?
            .map(Profile::from);

        Ok(profile)
    }
}
