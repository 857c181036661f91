use crate::{
    domain::common::{RecipeHubConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{kv::KeyValueBackend, spoonacular::SpoonacularClient},
};

pub type RecipeHubService = Service<SpoonacularClient, KeyValueBackend>;

pub async fn create_service(config: RecipeHubConfig) -> Result<RecipeHubService, CoreError> {
    let recipe_provider = SpoonacularClient::new(&config.spoonacular)?;
    let key_value_store = KeyValueBackend::from_config(&config.storage).await?;

    Ok(Service::new(
        recipe_provider,
        key_value_store,
        config.spoonacular.result_count,
    ))
}
