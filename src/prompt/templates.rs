use crate::request::PostType;

/// Render the instruction sent upstream for one sub-request
pub fn build_prompt(post_type: PostType, topic: &str, count: u32) -> String {
    match post_type {
        PostType::SocialMedia => social_media(topic, count),
        PostType::Statistic => statistic(topic, count),
    }
}

fn social_media(topic: &str, count: u32) -> String {
    format!(
        "As a professional content creator, I specialize in crafting diverse and engaging \
social media posts. Generate {count} unique, succinct posts spotlighting various aspects of \
{topic}. Present in a list format, adhering to outlined restrictions. Ensure each post remains \
within 10 to 50 words, devoid of duplication from previous responses or the current output. \
Exclude numbering, quotations, dots, emojis, and hashtags. Deliver captivating and distinctive \
descriptions. Example inspiration:

- Philosophy, a bridge connecting myriad strands of thought.
- Navigate life's waters with philosophy as your compass.
- Witness basketball courts burst with vibrant energy.
- Soccer speaks a universal language through exhilarating matches."
    )
}

fn statistic(topic: &str, count: u32) -> String {
    format!(
        "In the role of a data analyst, I compile insightful statistics on various subjects. \
Generate a set of {count} statistical insights about {topic}. Present in a list format, \
adhering to outlined restrictions. Provide numbers, percentages, or ratios where relevant. \
Keep each statistic concise, within 10 to 50 words, and avoid duplications from previous \
responses or the current output.
Please also provide a link to reference after the statistic, separated by semi colon.
Example inspiration:

- {topic} experiences a staggering 30% annual growth rate.
- A remarkable 75% of individuals surveyed prefer [feature].
- In the past year, [event] contributed to a 20% increase in [outcome]."
    )
}
