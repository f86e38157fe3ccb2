use anyhow::anyhow;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

const EXTRACTION_MODEL: &str = "gpt-3.5-turbo";
const EXTRACTION_TEMPERATURE: f32 = 0.2;
const EXTRACTION_MAX_TOKENS: u32 = 1500;

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl Default for OpenaiClient {
    fn default() -> Self {
        OpenaiClient {
            client: Client::new(),
        }
    }
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }

    /// One non-streaming chat completion per seed URL. Any failure here is
    /// fatal for the current seed, there is no retry.
    pub async fn extract_fund_info(&self, prompt: &str) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(EXTRACTION_MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .temperature(EXTRACTION_TEMPERATURE)
            .max_tokens(EXTRACTION_MAX_TOKENS)
            .build()?;

        let response = self.client.chat().create(request).await?;
        log::info!("Openai response id: {} model: {}", response.id, response.model);

        let first_choice = response
            .choices
            .first()
            .ok_or_else(|| anyhow!("No choices in Openai response"))?
            .message
            .content
            .clone()
            .ok_or_else(|| anyhow!("No content in Openai response"))?;

        Ok(first_choice.trim().to_string())
    }
}
