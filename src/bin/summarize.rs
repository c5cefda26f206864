//! Summarizer demo: condense a long article to 100 words.

use std::sync::Arc;

use agent_lab::llm::OpenAiCompatClient;
use agent_lab::{Agent, ChatModel, Config, Runner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ARTICLE_TEXT: &str = "The Future of Renewable Energy\n\n\
Renewable energy has rapidly transformed from a niche concept into one of the most critical \
drivers of global sustainability. Over the past two decades, the world has witnessed significant \
progress in clean energy technologies such as solar, wind, hydropower, and biomass. These sources \
are not only reshaping the global energy landscape but also playing a vital role in reducing \
greenhouse gas emissions. With climate change becoming an urgent global concern, governments, \
corporations, and communities are now investing more than ever in renewable energy solutions.\n\n\
Solar energy, in particular, has experienced exponential growth due to declining costs of \
photovoltaic panels and improved efficiency. Countries like China, India, and the United States are \
leading the solar revolution, installing massive solar farms and integrating rooftop solar systems \
into residential and commercial buildings. Similarly, wind energy has emerged as a powerful contender, \
with offshore wind farms gaining traction in Europe and Asia. Technological advancements in turbine \
design have increased energy output while reducing costs, making wind power a reliable and competitive option.\n\n\
Hydropower remains the largest source of renewable electricity worldwide. Although it faces challenges \
such as environmental impacts and geographical limitations, small-scale hydro projects and innovations \
in water turbine design continue to make it a valuable contributor to the renewable mix. Biomass energy, \
derived from organic materials such as agricultural waste and forestry products, also provides a \
sustainable alternative, particularly in rural regions where access to traditional energy infrastructure is limited.\n\n\
A key factor in the expansion of renewable energy has been supportive government policies and \
international collaboration. Agreements such as the Paris Climate Accord have pushed nations to \
commit to reducing carbon emissions, thereby accelerating investments in green technologies. Many \
countries now offer tax incentives, subsidies, and funding programs to encourage renewable energy \
adoption. Furthermore, private companies are increasingly pledging to transition to 100% renewable \
energy, demonstrating the growing importance of corporate sustainability.\n\n\
Despite these advances, the renewable energy sector faces challenges. One of the biggest hurdles is \
energy storage. Since solar and wind power are intermittent, storing excess energy in efficient \
batteries or other storage systems is critical to ensure consistent supply. Advances in lithium-ion \
and solid-state batteries are promising, but scaling these solutions remains expensive. Additionally, \
integrating renewable energy into existing power grids requires infrastructure upgrades and smart grid \
technologies to manage variable energy inputs effectively.\n\n\
Looking ahead, the future of renewable energy appears bright. Analysts predict that by 2050, the \
majority of the world's electricity will come from renewable sources, drastically cutting dependency \
on fossil fuels. Innovations in hydrogen fuel, carbon capture, and next-generation solar cells will \
further accelerate this transition. Moreover, as awareness of climate change grows, public support for \
renewable energy initiatives is expected to rise, creating a powerful push toward a greener and more \
sustainable future.\n\n\
In conclusion, renewable energy is no longer an option but a necessity for the planet's survival. \
With technological innovation, supportive policies, and global cooperation, the vision of a clean \
energy future is not only achievable but inevitable. The choices made today will shape the energy \
landscape for generations to come.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_lab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let client = Arc::new(OpenAiCompatClient::new(
        &config.base_url,
        &config.gemini_api_key,
    ));

    let agent = Agent::new(
        "Article Summary Agent",
        "You are a professional summarizer. \
         Your job is to condense long text into short, accurate summaries. \
         Never exceed 100 words. Focus only on the most important points.",
        ChatModel::new(config.model_or("gemini-2.0-flash"), client),
    );

    let prompt = format!("Summarize this 500-word article in 100 words: {}", ARTICLE_TEXT);
    let result = Runner::new(config.max_tool_rounds).run(&agent, &prompt).await?;

    println!("{}", result.final_output);
    Ok(())
}
