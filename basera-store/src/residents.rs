//! Resident enrollment and departure.
//!
//! A resident never changes alone: enrollment also provisions the
//! companion login account and takes a seat in the assigned room, and
//! departure releases both. Those side effects run here as explicit
//! steps instead of hiding inside the row store. Billing, complaint and
//! gate-pass history deliberately survives a departure.

use crate::error::StoreResult;
use crate::repository::Repository;
use crate::store::Store;
use basera_cloud::MediaStore;
use basera_model::{Collection, Credentials, Record, Resident, Room, UserAccount, UserRole};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Repository for residents plus the cross-collection steps that keep
/// accounts and rooms consistent with them.
#[derive(Clone)]
pub struct Residents {
    repo: Repository<Resident>,
    store: Arc<dyn Store>,
    media: Arc<MediaStore>,
}

impl Residents {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, media: Arc<MediaStore>) -> Self {
        Self {
            repo: Repository::new(store.clone()),
            store,
            media,
        }
    }

    /// Returns every readable resident, newest admissions first.
    pub async fn get_all(&self) -> Vec<Resident> {
        self.repo.get_all().await
    }

    /// Enrolls a resident.
    ///
    /// Inline profile images are uploaded first. The companion login
    /// defaults to national-ID as identifier and phone as password
    /// unless `login` overrides them. The assigned room, when one is
    /// named, gains an occupant.
    pub async fn add(&self, mut resident: Resident, login: Option<Credentials>) -> StoreResult<()> {
        if let Some(image) = resident.profile_image.take() {
            resident.profile_image = Some(self.media.store(&image).await);
        }

        let (identifier, password) = match login {
            Some(credentials) => (credentials.identifier, credentials.password),
            None => (resident.cnic.clone(), resident.phone.clone()),
        };
        let account = UserAccount {
            id: resident.id.clone(),
            identifier,
            password,
            role: UserRole::Resident,
            name: resident.name.clone(),
        };

        self.repo.add(&resident).await?;
        self.store
            .insert(Collection::Users, vec![account.encode()?])
            .await?;

        if !resident.room_number.is_empty() {
            self.shift_room_occupancy(&resident.room_number, 1).await?;
        }
        Ok(())
    }

    /// Applies a partial update, routing any new profile image through
    /// media storage first.
    pub async fn update(&self, id: &str, mut patch: Value) -> StoreResult<()> {
        let image = patch
            .get("profileImage")
            .and_then(Value::as_str)
            .map(str::to_owned);
        if let Some(image) = image {
            patch["profileImage"] = Value::String(self.media.store(&image).await);
        }

        self.repo.update(id, patch).await
    }

    /// Removes a resident, their login account, and their seat.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let room_number = self
            .get_all()
            .await
            .into_iter()
            .find(|resident| resident.id == id)
            .map(|resident| resident.room_number);

        self.repo.delete(id).await?;
        self.store.remove(Collection::Users, id).await?;

        if let Some(number) = room_number.filter(|number| !number.is_empty()) {
            self.shift_room_occupancy(&number, -1).await?;
        }
        Ok(())
    }

    /// Moves a room's occupancy by `delta` and stores the recomputed
    /// status. A room number nothing matches is a no-op.
    async fn shift_room_occupancy(&self, number: &str, delta: i32) -> StoreResult<()> {
        let rows = self.store.list(Collection::Rooms).await?;
        let Some(row) = rows.into_iter().find(|row| row["number"] == number) else {
            debug!("no room {number} to adjust");
            return Ok(());
        };

        let mut room = match Room::decode(row) {
            Ok(room) => room,
            Err(e) => {
                warn!("room {number} row is unreadable, leaving occupancy alone: {e}");
                return Ok(());
            }
        };

        room.shift_occupancy(delta);
        self.store
            .update(
                Collection::Rooms,
                &room.id,
                json!({
                    "currentOccupancy": room.current_occupancy,
                    "status": room.status,
                }),
            )
            .await
    }
}
