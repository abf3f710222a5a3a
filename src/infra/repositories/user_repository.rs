//! User repository - document-store persistence for the `User` entity.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Persistence abstraction for users.
///
/// `find_by_id` treats a string that is not a valid ObjectId as a plain
/// miss so callers never see a decode error for a bad path segment.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist the entity; inserts when `id` is absent, replaces otherwise.
    /// Returns the persisted entity with its store-generated id.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Fetch every stored user.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Remove the entity and hand it back.
    async fn delete(&self, user: User) -> AppResult<User>;
}

/// BSON document model for the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    password: String,
}

impl UserDocument {
    fn into_user(self) -> User {
        User {
            id: self.id.map(|oid| oid.to_hex()),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }

    fn from_user(user: &User, id: Option<ObjectId>) -> Self {
        Self {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

/// MongoDB-backed implementation of [`UserRepository`].
pub struct UserStore {
    collection: Collection<UserDocument>,
}

impl UserStore {
    pub fn new(collection: Collection<UserDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        match user.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok()) {
            Some(oid) => {
                let document = UserDocument::from_user(&user, Some(oid));
                self.collection
                    .replace_one(doc! { "_id": oid }, document)
                    .await?;
                Ok(user)
            }
            None => {
                let document = UserDocument::from_user(&user, None);
                let result = self.collection.insert_one(document).await?;
                let oid = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::internal("store returned a non-ObjectId identifier")
                })?;
                Ok(User {
                    id: Some(oid.to_hex()),
                    ..user
                })
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let document = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(document.map(UserDocument::into_user))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(documents.into_iter().map(UserDocument::into_user).collect())
    }

    async fn delete(&self, user: User) -> AppResult<User> {
        let oid = user
            .id
            .as_deref()
            .and_then(|id| ObjectId::parse_str(id).ok())
            .ok_or_else(|| AppError::internal("cannot delete a user without an id"))?;

        self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(user)
    }
}
