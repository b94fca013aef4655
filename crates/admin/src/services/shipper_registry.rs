//! Shipper registry service.
//!
//! Validates shipper writes and exposes the lists shown to admins.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use order_tracking_core::{DEFAULT_SHIPPERS, Shipper, ShipperId, ShipperInput, ValidationError};

use crate::db::{RepositoryError, ShipperRepository};

/// Errors returned by [`ShipperRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Submitted fields failed validation.
    #[error("invalid shipper: {0}")]
    Validation(#[from] ValidationError),

    /// Update targeted a shipper that does not exist.
    #[error("shipper {0} not found")]
    NotFound(ShipperId),

    /// Storage failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Carriers listed in a seed file.
///
/// ```yaml
/// shippers:
///   - name: DHL
///     tracking_url: https://www.dhl.com/track?AWB={tracking_number}
///   - name: Old Carrier
///     tracking_url: https://old.example/{tracking_number}
///     status: inactive
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ShipperSeedFile {
    pub shippers: Vec<ShipperInput>,
}

/// CRUD over stored shippers.
#[derive(Clone)]
pub struct ShipperRegistry {
    repo: Arc<dyn ShipperRepository>,
}

impl std::fmt::Debug for ShipperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipperRegistry").finish_non_exhaustive()
    }
}

impl ShipperRegistry {
    #[must_use]
    pub fn new(repo: Arc<dyn ShipperRepository>) -> Self {
        Self { repo }
    }

    /// Create a shipper, or update the one with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` if the input is invalid,
    /// `RegistryError::NotFound` if `id` does not exist, or
    /// `RegistryError::Repository` if storage fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn upsert(
        &self,
        input: ShipperInput,
        id: Option<ShipperId>,
    ) -> Result<Shipper, RegistryError> {
        let input = input.validate()?;

        let shipper = match id {
            Some(id) => self
                .repo
                .update(id, &input)
                .await?
                .ok_or(RegistryError::NotFound(id))?,
            None => self.repo.insert(&input).await?,
        };

        info!(shipper_id = %shipper.id, status = %shipper.status, "Saved shipper");
        Ok(shipper)
    }

    /// Delete a shipper. Orders that reference it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ShipperId) -> Result<bool, RegistryError> {
        let existed = self.repo.delete(id).await?;
        if existed {
            info!(shipper_id = %id, "Deleted shipper");
        } else {
            debug!(shipper_id = %id, "Delete of unknown shipper");
        }
        Ok(existed)
    }

    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    pub async fn get_by_id(&self, id: ShipperId) -> Result<Option<Shipper>, RegistryError> {
        Ok(self.repo.get(id).await?)
    }

    /// All shippers sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    pub async fn list_all(&self) -> Result<Vec<Shipper>, RegistryError> {
        Ok(self.repo.list(false).await?)
    }

    /// Active shippers sorted by name, for the order edit selector.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    pub async fn list_active(&self) -> Result<Vec<Shipper>, RegistryError> {
        Ok(self.repo.list(true).await?)
    }

    /// Install the default carriers into an empty registry.
    ///
    /// Returns the number of shippers inserted, which is zero when any
    /// shipper already exists.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    #[instrument(skip(self))]
    pub async fn seed_defaults(&self) -> Result<usize, RegistryError> {
        let inputs: Vec<ShipperInput> = DEFAULT_SHIPPERS.iter().map(|s| s.to_input()).collect();
        self.seed(inputs).await
    }

    /// Install carriers from a seed file into an empty registry.
    ///
    /// Every entry is validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Validation` for the first invalid entry, or
    /// `RegistryError::Repository` if storage fails.
    #[instrument(skip(self, file), fields(count = file.shippers.len()))]
    pub async fn seed_from_file(&self, file: ShipperSeedFile) -> Result<usize, RegistryError> {
        let inputs = file
            .shippers
            .into_iter()
            .map(ShipperInput::validate)
            .collect::<Result<Vec<_>, _>>()?;
        self.seed(inputs).await
    }

    async fn seed(&self, inputs: Vec<ShipperInput>) -> Result<usize, RegistryError> {
        let existing = self.repo.count().await?;
        if existing > 0 {
            info!(existing, "Shippers already present, skipping seed");
            return Ok(0);
        }

        let mut inserted = 0;
        for input in inputs {
            self.upsert(input, None).await?;
            inserted += 1;
        }

        info!(inserted, "Seeded shippers");
        Ok(inserted)
    }

    pub(crate) async fn purge(&self) -> Result<u64, RegistryError> {
        Ok(self.repo.purge().await?)
    }
}
