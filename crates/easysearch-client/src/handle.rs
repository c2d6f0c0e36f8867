//! Local handles on server-side entities.
//!
//! A [`Handle`] is either live, holding the last attributes the server
//! reported, or destroyed. Destroyed is terminal: once the server says the
//! entity is gone (a 404 on refresh) or a delete succeeds, every read and
//! every call through the handle fails with `Error::Destroyed` without
//! touching the network.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use easysearch_core::{Error, Result};

use crate::client::Client;

/// The API a handle talks to for its single-entity fetch and delete.
pub trait Collection: Clone {
    fn client(&self) -> &Client;
    fn member_path(&self, id: &str) -> String;
}

/// Attributes of one remote entity, decoded from its JSON representation.
pub trait Entity: DeserializeOwned {
    const KIND: &'static str;
    type Api: Collection;

    /// Identifier used to fetch this entity again.
    fn remote_id(&self) -> &str;
}

#[derive(Debug, Clone)]
enum State<E> {
    Live(E),
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct Handle<E: Entity> {
    api: E::Api,
    id: String,
    state: State<E>,
}

impl<E: Entity> Handle<E> {
    pub(crate) fn from_response(api: E::Api, body: &str) -> Result<Self> {
        let entity: E = serde_json::from_str(body)?;
        Self::from_entity(api, entity)
    }

    pub(crate) fn list_from_response(api: &E::Api, body: &str) -> Result<Vec<Self>> {
        let items: Vec<Value> = serde_json::from_str(body)?;
        items
            .into_iter()
            .map(|item| Self::from_entity(api.clone(), serde_json::from_value(item)?))
            .collect()
    }

    fn from_entity(api: E::Api, entity: E) -> Result<Self> {
        let id = checked_id(&entity)?;
        Ok(Self { api, id, state: State::Live(entity) })
    }

    /// Current attributes, or `Error::Destroyed`.
    pub fn get(&self) -> Result<&E> {
        match &self.state {
            State::Live(entity) => Ok(entity),
            State::Destroyed => Err(Error::Destroyed(E::KIND)),
        }
    }

    pub fn into_inner(self) -> Result<E> {
        match self.state {
            State::Live(entity) => Ok(entity),
            State::Destroyed => Err(Error::Destroyed(E::KIND)),
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.state, State::Destroyed)
    }

    /// Guarded access to the owning API and this entity's id.
    pub(crate) fn live_api(&self) -> Result<(&E::Api, &str)> {
        self.get()?;
        Ok((&self.api, &self.id))
    }

    /// Re-fetches the entity and replaces every attribute at once.
    ///
    /// A 404 marks the handle destroyed and returns `Error::Destroyed`.
    pub fn refresh(&mut self) -> Result<&E> {
        let (api, id) = self.live_api()?;
        let path = api.member_path(id);
        match api.client().fetch(&path)? {
            Some(body) => {
                let entity: E = serde_json::from_str(&body)?;
                self.replace(entity)?;
                self.get()
            }
            None => {
                debug!(kind = E::KIND, id = %self.id, "remote entity is gone");
                self.state = State::Destroyed;
                Err(Error::Destroyed(E::KIND))
            }
        }
    }

    /// Deletes the entity. The handle is destroyed only if the server
    /// confirms; on failure it stays live and the error is returned.
    pub fn destroy(&mut self) -> Result<()> {
        let (api, id) = self.live_api()?;
        api.client().delete(&api.member_path(id))?;
        debug!(kind = E::KIND, id = %self.id, "destroyed");
        self.state = State::Destroyed;
        Ok(())
    }

    pub(crate) fn replace(&mut self, entity: E) -> Result<()> {
        self.id = checked_id(&entity)?;
        self.state = State::Live(entity);
        Ok(())
    }
}

/// An entity without an id cannot be fetched or deleted again.
fn checked_id<E: Entity>(entity: &E) -> Result<String> {
    match entity.remote_id() {
        "" => Err(Error::Decode(format!("{} in response has no identifier", E::KIND))),
        id => Ok(id.to_string()),
    }
}

/// `null` and missing both decode as the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
