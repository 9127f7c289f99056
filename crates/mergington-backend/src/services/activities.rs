use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activities, Activity};
use mergington::errors::RosterError;
use mergington::log;

/// A trait for browsing activities and managing their participants.
///
/// Activities themselves are fixed for the lifetime of the service; only the
/// participant lists change, through [`ActivityService::signup`] and
/// [`ActivityService::unregister`]. The trait is storage-agnostic so the
/// in-memory roster can later be swapped for a persistent one.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let message = service.signup("Chess Club", "alice@mergington.edu").await?;
///     println!("{message}");
///
///     let activities = service.list().await?;
///     assert!(activities["Chess Club"].has_participant("alice@mergington.edu"));
///
///     service.unregister("Chess Club", "alice@mergington.edu").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns a snapshot of every activity keyed by name.
    async fn list(&self) -> Result<Activities, Self::Error>;

    /// Retrieves a single activity by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity exists with the given name.
    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error>;

    /// Adds `email` to the end of the activity's participant list and returns
    /// a confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is already
    /// on its roster.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<String, Self::Error>;

    /// Removes `email` from the activity's participant list and returns a
    /// confirmation message.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not on
    /// its roster.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<String, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`. Signup and unregister mutate through
/// `get_mut`, which holds the entry's shard lock for the whole
/// check-then-modify, so concurrent requests for the same activity never
/// observe a half-applied change. Nothing survives a restart.
///
/// # Examples
/// ```rust,ignore
/// let service = ActivityServiceInMemory::seeded();
/// service.signup("Art Club", "newemail@mergington.edu").await.unwrap();
/// let art = service.get("Art Club").await.unwrap();
/// assert!(art.has_participant("newemail@mergington.edu"));
/// ```
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Creates a roster holding the given activities.
    pub fn with_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    /// Creates a roster seeded with the school's activities.
    pub fn seeded() -> Self {
        Self::with_activities(super::seed::activities())
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = RosterError;

    async fn list(&self) -> Result<Activities, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn get(&self, activity_name: &str) -> Result<Activity, Self::Error> {
        self.activities
            .get(activity_name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.add_participant(email.to_string()) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!(activity = activity_name, email, "participant signed up");
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<String, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound(activity_name.to_string()))?;

        if !activity.remove_participant(email) {
            return Err(RosterError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        log::info!(activity = activity_name, email, "participant unregistered");
        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}
