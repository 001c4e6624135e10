use async_trait::async_trait;

use crate::matching::application::mappers::VolunteerMatchDto;
use crate::matching::application::ports::{
    incoming::use_cases::{GetMatchingVolunteersError, GetMatchingVolunteersUseCase},
    outgoing::VolunteerDirectory,
};

#[derive(Debug, Clone)]
pub struct GetMatchingVolunteersService<D>
where
    D: VolunteerDirectory + Send + Sync,
{
    directory: D,
}

impl<D> GetMatchingVolunteersService<D>
where
    D: VolunteerDirectory + Send + Sync,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> GetMatchingVolunteersUseCase for GetMatchingVolunteersService<D>
where
    D: VolunteerDirectory + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<VolunteerMatchDto>, GetMatchingVolunteersError> {
        let profiles = self
            .directory
            .volunteer_profiles()
            .await
            .map_err(|e| GetMatchingVolunteersError::RepositoryError(e.to_string()))?;

        Ok(profiles.iter().map(VolunteerMatchDto::from).collect())
    }
}
