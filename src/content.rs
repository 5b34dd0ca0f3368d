//! Page content
//!
//! The narrative, chart placements and image references of the explorer page.
//! Charts name an asset key (file stem under `charts/`); every placement has
//! its own id so the same asset can appear in several sections.

use crate::state::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "UK Winter Barley", anchor: "uk-winter-barley" },
    NavItem { label: "Fertiliser Usage", anchor: "fertiliser-usage" },
    NavItem { label: "Weather", anchor: "weather" },
    NavItem { label: "Insect Populations", anchor: "insect-populations" },
    NavItem { label: "Asia", anchor: "asia" },
    NavItem { label: "Africa", anchor: "africa" },
    NavItem { label: "Global", anchor: "global-implications" },
    NavItem { label: "Future", anchor: "future" },
    NavItem { label: "References", anchor: "references" },
];

/// Navigation anchors in order, as scroll-spy sections
pub fn nav_sections() -> Vec<SectionId> {
    NAV_ITEMS.iter().map(|item| SectionId::new(item.anchor)).collect()
}

/// Colour role of a callout card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Muted,
}

#[derive(Debug, Clone, Copy)]
pub struct Callout {
    pub title: Option<&'static str>,
    pub body: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub profile: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Reference {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Introductory paragraph under the section heading
    Lead(&'static str),
    /// Button that scrolls to another section
    ScrollCue { label: &'static str, target: &'static str },
    Chart {
        id: &'static str,
        asset: &'static str,
        /// Slot height in pixels, used in place of the asset's own height
        height: f32,
        caption: Option<&'static str>,
    },
    Image {
        file: &'static str,
        description: &'static str,
        caption: Option<&'static str>,
    },
    Callouts(&'static [Callout]),
    Team(&'static [TeamMember]),
    References(&'static [Reference]),
    /// Titled paragraphs
    Notes(&'static [(&'static str, &'static str)]),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub badge: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub blocks: &'static [Block],
}

const fn callout(title: Option<&'static str>, body: &'static str, tone: Tone) -> Callout {
    Callout { title, body, tone }
}

pub const SITE_TITLE: &str = "NPK Impact Explorer";

pub const FOOTER: [&str; 2] = [
    "Data sourced from various agricultural databases and research institutions.",
    "© 2025 Team Others. All rights reserved.",
];

pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        badge: None,
        title: SITE_TITLE,
        subtitle: Some("Understanding Fertilizer's Role in Agricultural Transformation"),
        blocks: &[
            Block::Lead(
                "Explore two decades of data across UK, Asia, and Africa to understand how \
                 NPK fertilizers have shaped global agriculture.",
            ),
            Block::ScrollCue { label: "⬇ Scroll to Explore", target: "two-decade" },
        ],
    },
    Section {
        id: "two-decade",
        badge: Some("📊 Historical Analysis"),
        title: "1990–2000 vs 2010–2020",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This section compares agricultural data from the 1990s and 2010s, highlighting \
                 key changes in fertilizer usage, yields, weather patterns, and insect populations \
                 across different regions.",
            ),
            Block::Chart {
                id: "two-decade-summary",
                asset: "1_SummaryPlot_1990",
                height: 550.0,
                caption: None,
            },
            Block::Callouts(&[
                callout(
                    Some("⚠ 1995-1996 Drought Impact"),
                    "Despite high fertiliser inputs (130+ kg N/ha), yields dropped significantly \
                     due to water stress. This demonstrates the critical role of weather in \
                     nutrient uptake efficiency.",
                    Tone::Primary,
                ),
                callout(
                    Some("⭐ 2010s Stability"),
                    "More consistent rainfall patterns and improved water management led to \
                     stable, high yields even with reduced fertiliser inputs, showing the \
                     benefits of precision agriculture.",
                    Tone::Secondary,
                ),
            ]),
        ],
    },
    Section {
        id: "team",
        badge: Some("👥 Our Team"),
        title: "Meet Team Others",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "A diverse group of researchers and data scientists passionate about \
                 understanding agricultural transformation through data.",
            ),
            Block::Team(&[
                TeamMember {
                    name: "Hamza Wahbi",
                    role: "Data Scientist & Research Lead",
                    initials: "HW",
                    profile: Some("https://www.linkedin.com/in/hamzawahbi/"),
                },
                TeamMember {
                    name: "Furkan T",
                    role: "Agricultural Systems Analyst",
                    initials: "FT",
                    profile: Some("https://www.linkedin.com/in/furkan-t-88926a155/"),
                },
                TeamMember {
                    name: "Emma Watts",
                    role: "Environmental Data Specialist",
                    initials: "EW",
                    profile: Some("https://www.linkedin.com/in/emma-watts-6a449119b/"),
                },
                TeamMember {
                    name: "Akram Atmani",
                    role: "Statistical Modeling Expert",
                    initials: "AA",
                    profile: Some("https://www.linkedin.com/in/akram-atmani/"),
                },
                TeamMember {
                    name: "Shihan Zhang",
                    role: "Data Visualization Specialist",
                    initials: "SZ",
                    profile: Some("https://www.linkedin.com/in/shihan-zhang-a2749b219/"),
                },
                TeamMember {
                    name: "Isabella",
                    role: "Research Assistant",
                    initials: "IS",
                    profile: None,
                },
            ]),
        ],
    },
    Section {
        id: "uk-winter-barley",
        badge: Some("UK Case Study"),
        title: "UK Winter Barley",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This case study examines the impact of NPK fertilizers on UK winter barley \
                 production over two decades, including trends in fertilizer usage, yields, \
                 weather conditions, and insect populations.",
            ),
            Block::Chart {
                id: "uk-fertiliser-90s",
                asset: "4_FertiliserUse_90s",
                height: 450.0,
                caption: None,
            },
            Block::Callouts(&[callout(
                None,
                "Fertiliser usage increased by 50% from 1990s to 2010s, indicating \
                 intensification of agricultural practices in UK winter barley production.",
                Tone::Secondary,
            )]),
            Block::Image {
                file: "correlation-grain-straw-insect.png",
                description: "Correlation heatmap showing relationships between grain/straw \
                              production and insect species populations comparing 1990-2000 \
                              vs 2010-2020",
                caption: Some(
                    "Analysis of correlations between grain and straw production with insect \
                     species populations across two decades",
                ),
            },
            Block::Callouts(&[
                callout(
                    None,
                    "Strong positive correlations (0.29-0.38) between grain production and insect \
                     populations, indicating a more balanced ecosystem with higher biodiversity \
                     supporting agricultural productivity.",
                    Tone::Primary,
                ),
                callout(
                    None,
                    "Negative correlations (-0.12 to -0.30) suggest intensified farming practices \
                     may have disrupted natural insect-crop relationships, highlighting the need \
                     for sustainable agriculture approaches.",
                    Tone::Secondary,
                ),
            ]),
            Block::Image {
                file: "strip8-decade-comparison.png",
                description: "Box plot comparison showing grain yield, straw yield, summer \
                              rainfall, and summer temperature for Strip 8 comparing 1990-2000 \
                              vs 2010-2020 periods",
                caption: Some(
                    "Detailed comparison of agricultural metrics and weather patterns for Strip 8 \
                     across 1990-2000 vs 2010-2020",
                ),
            },
            Block::Callouts(&[
                callout(
                    None,
                    "Grain yields remained stable around 6 tonnes/ha in the 1990s but became more \
                     consistent in the 2010s (5.7 tonnes/ha), while straw yields showed similar \
                     patterns with reduced variability in recent decades.",
                    Tone::Primary,
                ),
                callout(
                    None,
                    "Summer rainfall decreased significantly from ~200mm in the 1990s to ~175mm in \
                     the 2010s, while summer temperatures remained stable around 16.5°C, \
                     indicating adaptation to drier conditions.",
                    Tone::Secondary,
                ),
            ]),
        ],
    },
    Section {
        id: "weather",
        badge: Some("Climate"),
        title: "Weather Patterns",
        subtitle: None,
        blocks: &[
            Block::Chart {
                id: "uk-weather-2010",
                asset: "1_SummaryPlot_2010",
                height: 450.0,
                caption: None,
            },
            Block::Callouts(&[callout(
                None,
                "Weather variability has increased significantly, with rainfall and temperature \
                 patterns showing greater year-to-year variation affecting crop yields.",
                Tone::Primary,
            )]),
        ],
    },
    Section {
        id: "insect-populations",
        badge: Some("Ecosystem"),
        title: "Insect Populations",
        subtitle: None,
        blocks: &[
            Block::Image {
                file: "yearly-aphid-abundance.png",
                description: "Bar chart showing yearly abundance of three aphid species - \
                              Metopolophium dirhodum (Rose-grain aphid), Rhopalosiphum padi \
                              (Bird cherry-oat aphid), and Sitobion avenae (English grain aphid) \
                              from 1990 to 2020",
                caption: Some(
                    "Long-term monitoring of key aphid species showing population dynamics over \
                     three decades",
                ),
            },
            Block::Callouts(&[
                callout(
                    None,
                    "English grain aphid (Sitobion avenae) showed dramatic population spikes in \
                     1996 (>12,000) and 2011 (~6,000), indicating climate-driven outbreak years \
                     with potential crop damage.",
                    Tone::Accent,
                ),
                callout(
                    None,
                    "Overall aphid populations have declined significantly since 2014, with most \
                     recent years showing very low abundance across all species, potentially \
                     impacting natural pest control and pollination services.",
                    Tone::Secondary,
                ),
            ]),
            Block::Placeholder("Comparison Chart Placeholder"),
        ],
    },
    Section {
        id: "fertiliser-usage",
        badge: Some("Usage Analysis"),
        title: "Fertiliser Usage",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This visualization compares average fertilizer inputs with nutrient uptake \
                 between the 1990s and 2010s, highlighting efficiency improvements.",
            ),
            Block::Chart {
                id: "fertiliser-usage-10s",
                asset: "4_FertiliserUse_10s",
                height: 550.0,
                caption: None,
            },
            Block::Callouts(&[
                callout(
                    None,
                    "Fertilizer usage increased by 50% while yields improved by 30%, indicating \
                     better efficiency in the 2010s through precision agriculture techniques.",
                    Tone::Accent,
                ),
                callout(
                    None,
                    "Modern fertilizer application methods show improved nutrient uptake \
                     efficiency, reducing environmental impact while maintaining productivity.",
                    Tone::Primary,
                ),
            ]),
        ],
    },
    Section {
        id: "global-implications",
        badge: Some("🌍 Global Impact"),
        title: "Global Implications",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "The 1990s laid the foundation for modern agriculture, but the 2010s brought \
                 transformative changes in fertilizer efficiency and sustainability.",
            ),
            Block::Callouts(&[
                callout(
                    Some("Efficiency"),
                    "Fertilizer usage increased by 50% while yields improved by 30%, indicating \
                     better efficiency in the 2010s.",
                    Tone::Muted,
                ),
                callout(
                    Some("Climate"),
                    "Weather variability has greater impact on yields in recent decades, \
                     highlighting the need for climate-resilient practices.",
                    Tone::Primary,
                ),
                callout(
                    Some("Biodiversity"),
                    "Insect populations have declined, potentially affecting pollination and pest \
                     control in agricultural systems.",
                    Tone::Primary,
                ),
                callout(
                    Some("Worldwide"),
                    "Global case studies show similar trends, suggesting universal challenges and \
                     opportunities in fertilizer management.",
                    Tone::Muted,
                ),
            ]),
        ],
    },
    Section {
        id: "asia",
        badge: Some("Asia Case Study"),
        title: "Asia (Rice Case Study)",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This case study examines rice production in Asia, showing changes in yield over \
                 time and comparisons across decades.",
            ),
            Block::Chart {
                id: "asia-rice",
                asset: "1_SummaryPlot_1990",
                height: 550.0,
                caption: None,
            },
            Block::Callouts(&[
                callout(
                    None,
                    "Asia's rice production shows steady growth from 1990-2020, with fertilizer \
                     optimization playing a crucial role in feeding the world's largest \
                     population.",
                    Tone::Primary,
                ),
                callout(
                    None,
                    "Modern rice varieties combined with balanced NPK fertilization have increased \
                     yields while adapting to changing climate conditions.",
                    Tone::Secondary,
                ),
            ]),
        ],
    },
    Section {
        id: "africa",
        badge: Some("Africa Case Study"),
        title: "Africa (Maize Case Study)",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This case study examines maize production in Africa, showing changes in yield \
                 over time and comparisons across decades.",
            ),
            Block::Chart {
                id: "africa-maize",
                asset: "1_SummaryPlot_2010",
                height: 550.0,
                caption: None,
            },
            Block::Callouts(&[
                callout(
                    None,
                    "Africa's maize production shows significant potential for growth with proper \
                     fertilizer management and improved agricultural practices.",
                    Tone::Secondary,
                ),
                callout(
                    None,
                    "Strategic NPK fertilization can help address food security challenges while \
                     building sustainable agricultural systems across the continent.",
                    Tone::Accent,
                ),
            ]),
        ],
    },
    Section {
        id: "future",
        badge: Some("Future Vision"),
        title: "Future Pathways",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "Exploring potential future scenarios for agriculture based on current trends and \
                 innovations.",
            ),
            Block::Notes(&[
                (
                    "Precision Agriculture",
                    "Advanced technologies for precise nutrient application and integrated \
                     farming systems to optimize resource use.",
                ),
                (
                    "Climate Adaptation",
                    "Adaptation strategies for changing weather patterns, focusing on \
                     drought-resistant crops and water management.",
                ),
                (
                    "Sustainable Intensification",
                    "Sustainable intensification using data-driven approaches to increase \
                     productivity without environmental degradation.",
                ),
                (
                    "Circular Nutrients",
                    "Closed-loop systems that recycle nutrients and minimize waste, promoting \
                     long-term soil health and biodiversity.",
                ),
            ]),
        ],
    },
    Section {
        id: "synthesis",
        badge: Some("Final Analysis"),
        title: "Synthesis",
        subtitle: None,
        blocks: &[
            Block::Lead(
                "This section summarizes the key findings from the two-decade analysis, \
                 highlighting trends in fertilizer use, yields, and overall efficiency.",
            ),
            Block::Chart {
                id: "synthesis-fertiliser",
                asset: "4_FertiliserUse_90s",
                height: 550.0,
                caption: None,
            },
            Block::Callouts(&[
                callout(
                    None,
                    "The 2010s showed 30% better fertilizer efficiency compared to the 1990s, \
                     demonstrating technological advancement and precision agriculture adoption.",
                    Tone::Accent,
                ),
                callout(
                    None,
                    "Consistent patterns across UK, Asia, and Africa show universal benefits of \
                     optimized NPK fertilization strategies for sustainable agriculture.",
                    Tone::Primary,
                ),
                callout(
                    None,
                    "Data-driven fertilization combined with climate adaptation strategies will be \
                     crucial for meeting future food security challenges.",
                    Tone::Secondary,
                ),
            ]),
        ],
    },
    Section {
        id: "references",
        badge: Some("Documentation"),
        title: "References",
        subtitle: None,
        blocks: &[
            Block::References(&[
                Reference {
                    title: "UK Agricultural Statistics - DEFRA",
                    body: "Department for Environment, Food and Rural Affairs. UK winter barley \
                           production data, fertilizer usage statistics, and yield measurements \
                           from 1990-2020. Published annually in the Agricultural Statistics \
                           bulletin.",
                },
                Reference {
                    title: "FAO Global Rice Production Database",
                    body: "Food and Agriculture Organization of the United Nations. Rice \
                           production statistics for Asian countries, including yield per \
                           hectare, fertilizer application rates, and climate data. FAOSTAT \
                           database, accessed 2025.",
                },
                Reference {
                    title: "African Maize Production Analysis - CGIAR",
                    body: "Consultative Group for International Agricultural Research. \
                           Comprehensive dataset on maize production across Sub-Saharan Africa, \
                           including fertilizer usage patterns and yield variations from \
                           1990-2020.",
                },
                Reference {
                    title: "Climate and Weather Data - Met Office",
                    body: "UK Met Office Historical Weather Data. Rainfall, temperature, and \
                           seasonal variation data used for weather pattern analysis and \
                           correlation with agricultural yields.",
                },
                Reference {
                    title: "Insect Population Monitoring - BISCIT",
                    body: "Biological Impacts of Sustainable Crop Intensification Technologies. \
                           Long-term ecological monitoring data on insect populations and \
                           biodiversity impacts in agricultural systems across the study \
                           regions.",
                },
            ]),
            Block::Notes(&[
                (
                    "Statistical Analysis",
                    "Time series analysis using Python pandas and scipy.stats for trend \
                     identification and correlation analysis between fertilizer usage, weather \
                     patterns, and yield outcomes.",
                ),
                (
                    "Data Visualization",
                    "Interactive charts created using Plotly.js and D3.js for comprehensive data \
                     exploration and pattern recognition across multiple decades and \
                     geographical regions.",
                ),
                (
                    "Quality Assurance",
                    "Data validation through cross-referencing multiple sources, outlier \
                     detection, and statistical significance testing to ensure reliability of \
                     findings.",
                ),
            ]),
        ],
    },
];

/// Every chart placement on the page as `(placement id, asset key)`
pub fn chart_placements() -> impl Iterator<Item = (&'static str, &'static str)> {
    SECTIONS.iter().flat_map(|s| s.blocks.iter()).filter_map(|b| match b {
        Block::Chart { id, asset, .. } => Some((*id, *asset)),
        _ => None,
    })
}

/// Every image file referenced on the page
pub fn image_files() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().flat_map(|s| s.blocks.iter()).filter_map(|b| match b {
        Block::Image { file, .. } => Some(*file),
        _ => None,
    })
}
