//! Prompt assembly for page and caption generation

use rand::seq::IndexedRandom;

/// Visual themes for page designs. One is drawn at random per variant so
/// sibling pages in a fan-out do not repeat a style.
pub const DESIGN_THEMES: &[&str] = &[
    "Vibrant geometric patterns and shapes",
    "Elegant and colorful floral motifs",
    "Whimsical celestial elements like stars, moons, and galaxies",
    "Joyful abstract splashes of paint and color",
    "Playful and cute illustrated animal stickers",
    "Serene nature-inspired themes like leaves, trees, and water ripples",
    "Funky and fun retro 90s style with bright neon colors and patterns",
    "Modern, clean digital art with bold lines and simple shapes",
    "Charming hand-drawn doodles and whimsical sketches",
    "A minimalist design using a single bold accent color against a clean background",
    "A magical storybook illustration style",
    "A dynamic pop-art inspired theme with comic-book like elements",
    "A travel and adventure theme using maps, compasses, or postcard elements",
    "A cozy and rustic digital scrapbook feel with digital washi tape and paper clips",
    "A futuristic theme with glowing lines and digital circuit patterns",
    "Art deco style with bold geometric lines and gold accents.",
    "Underwater oceanic theme with coral, bubbles, and gentle waves.",
    "Lush tropical paradise with monstera leaves, hibiscus flowers, and vibrant colors.",
    "Sweet candy-land theme with pastel swirls, lollipops, and sprinkles.",
    "Steampunk aesthetic with intricate gears, cogs, and warm metallic tones.",
    "Elegant Art Nouveau with flowing, organic lines and nature-inspired motifs.",
    "A playful \"day at the circus\" theme with big top tents, tickets, and cheerful patterns.",
    "8-bit video game or pixel art style.",
    "A design that mimics the look of a beautiful stained glass window.",
    "A vibrant graffiti and street art style with bold lettering and spray paint effects.",
    "A dreamy winter wonderland theme with delicate snowflakes and cool, icy colors.",
    "A classic film noir aesthetic with high-contrast black and white, and a single accent color.",
];

const PAGE_PROMPT_TEMPLATE: &str = r#"You are a creative and skilled 'Photo Book Maker' and 'photo-album designer', specializing in crafting personalized, emotionally resonant photo book pages. Your specific project is a 'Mummy Journey Storybook' gifted from a husband to his wife.

**Overall Tone**: Creative, emotional, thoughtful, and professional. Maintain a tone appropriate for a personalized, heartfelt gift. Avoid repetitive phrases and ensure each caption feels fresh and unique.

**CRITICAL INSTRUCTIONS**: Your final output must have TWO separate parts:
1.  **A single A4 portrait IMAGE**: This image will be printed directly by the user.
2.  **A plain TEXT block**: This text block must contain ONLY the heartfelt caption you generated.

---

**IMAGE GENERATION RULES (Part 1):**

-   **Page Design & Style**:
    -   Create a unique, A4 portrait page design. The graphic style, borders, and background must be completely unique for each generation.
    -   **Style Inspiration for THIS Generation**: To ensure variety and prevent repetition, you MUST draw heavy inspiration from the following randomly selected theme: **"{THEME}"**.
    -   The overall visual style MUST be **VIBRANT**, clean, and have a cheerful, animated, or digital art feel.
    -   **AVOID**: Pastel colors, watercolor styles, oil painting effects, or grungy textures.

-   **Photo Integration & Editing**:
    -   **Dominant Placement**: The user's photo is the centerpiece. Transform, resize, and position it to fill the majority of the page.
    -   **Professional Edits**: Professionally edit the user's photo. Adjust color and lighting to make it pop and match the vibrant page aesthetic.
    -   **Subject Focus & Cleanup**: If necessary, digitally remove distracting background objects or people to focus the composition on the main subjects (e.g., the mother, father, baby). The goal is to create a clean, focused portrait.
    -   **Seamless Inpainting**: Heavily enhance the photo with detailed, creative inpainting, an abundance of graphics, and artistic stickers that seamlessly blend with the photo and background to create a rich, scrapbook-like feel, all while adhering to the chosen style inspiration.

-   **On-Page Text Elements**:
    -   **Heading**: {HEADING_RULE}
    -   **Date**: Render the provided photo date ("{PHOTO_DATE}") prominently and artistically onto the A4 page image.
        -   **Placement**: It MUST be a major design element placed clearly and beautifully BELOW the heading.
        -   **Font & Size**: Use a different, complementary font for the date than the heading. The date's font size should be approximately **half the size of the heading's font size**.
        -   **CRITICAL**: The date MUST NOT be placed inside or anywhere near the blank caption space at the bottom of the page.
    -   **Spelling**: CRITICAL: Ensure all text on the image, especially the heading, is spelled correctly.

-   **!! VERY IMPORTANT !! Blank Caption Space**:
    -   You MUST NOT render the caption text onto the image.
    -   You MUST create a beautifully designed, PLAIN, and BLANK space for a handwritten caption.
    -   This space should be decorated to fit the page's aesthetic (e.g., a simple border or background element), but it MUST NOT contain any lines. It must be left completely EMPTY.
    -   **Height Constraint**: This blank caption area must not take up more than 20% of the total image height.
    -   **Width Constraint**: This blank space MUST span at least 90% of the page's total width.

---

**TEXT GENERATION RULES (Part 2):**

-   Generate a heartfelt, deeply emotional caption, approximately 3 sentences long, from the husband's perspective using the context below.
-   The caption should be written in a way that connects directly to his wife's heart when she reads it, evoking the specific feelings and memories of that moment.
-   Provide this caption as a separate, plain text output. This text is for the user to copy and will not be on the image.

---

**Context for Caption Generation:**
-   **Calculated Context**: The photo was taken {DATE_CONTEXT}. You MUST explicitly mention this context in the caption (e.g., 'This was week 20 of your pregnancy...' or 'Our little one was 3 weeks old here...').
-   **Husband's Note**: "{NOTE}"
"#;

const CAPTION_PROMPT_TEMPLATE: &str = r#"You are a creative writer crafting a caption for a page in a 'Mummy Journey Storybook' from a husband to his wife.
Your task is to generate ONLY a new, unique, and heartfelt caption based on the provided context.

**Tone**: Emotional, thoughtful, and personal.

**Rules**:
- Write from the husband's first-person perspective.
- The caption should be heartfelt, deeply emotional, and approximately 3 sentences long.
- It should be written to connect directly to his wife's heart, evoking the specific feelings and memories of that moment.
- Your output MUST be plain text, containing ONLY the caption.
- Do NOT output any other text, titles, or formatting.

---
**Context for Caption Generation:**
- **Calculated Context**: The photo was taken {DATE_CONTEXT}. You MUST explicitly mention this context in the caption (e.g., 'This was week 20 of your pregnancy...' or 'Our little one was 3 weeks old here...').
- **Husband's Note**: "{NOTE}"
"#;

const GENERATED_HEADING_RULE: &str = "Generate a short, lovely, and unique heading that is directly inspired by the theme of the caption you are generating. For example, if the caption is about a quiet moment, the heading could be \"Our Gentle Hush\" or \"A Quiet Corner.\" The heading must feel random and not be a generic phrase. Place this heading prominently at the top of the page in a beautiful, artistic font.";

const CUSTOM_HEADING_RULE: &str = "Use this exact heading, without rewording it: \"{HEADING}\". Place it prominently at the top of the page in a beautiful, artistic font.";

const NOTE_FALLBACK: &str = "No specific note was provided. Please analyze the image content (expressions, setting, objects) to infer the context and write a personal, heartfelt caption based on what you see.";

/// Everything the page prompt embeds besides the photo itself
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    /// Theme drawn for this variant, usually via [`random_theme`]
    pub theme: &'a str,
    /// Display-form date, e.g. `Aug 30, 2025`
    pub display_date: &'a str,
    /// Journey context phrase for the photo date
    pub date_context: &'a str,
    /// The user's free-form memory note, if any
    pub note: Option<&'a str>,
    /// A heading to render verbatim; the model invents one when absent
    pub heading: Option<&'a str>,
}

/// Draw a random design theme for one variant
pub fn random_theme() -> &'static str {
    let mut rng = rand::rng();
    DESIGN_THEMES
        .choose(&mut rng)
        .copied()
        .unwrap_or(DESIGN_THEMES[0])
}

/// Render the full page-generation prompt
pub fn page_prompt(context: &PromptContext) -> String {
    let heading_rule = match non_empty(context.heading) {
        Some(heading) => CUSTOM_HEADING_RULE.replace("{HEADING}", heading),
        None => GENERATED_HEADING_RULE.to_string(),
    };

    PAGE_PROMPT_TEMPLATE
        .replace("{THEME}", context.theme)
        .replace("{HEADING_RULE}", &heading_rule)
        .replace("{PHOTO_DATE}", context.display_date)
        .replace("{DATE_CONTEXT}", context.date_context)
        .replace("{NOTE}", note_or_fallback(context.note))
}

/// Render the caption-only regeneration prompt
pub fn caption_prompt(date_context: &str, note: Option<&str>) -> String {
    CAPTION_PROMPT_TEMPLATE
        .replace("{DATE_CONTEXT}", date_context)
        .replace("{NOTE}", note_or_fallback(note))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn note_or_fallback(note: Option<&str>) -> &str {
    non_empty(note).unwrap_or(NOTE_FALLBACK)
}
