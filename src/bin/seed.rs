//! 示例内容灌入工具
//!
//! 通过存储能力接口写入几个示例项目，方便本地开发和演示。
//! 两种后端都可以用，选择逻辑与主程序一致：
//!
//! ```text
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```

use color_eyre::Result;
use database::{initialize_database, PgStorage};
use shared_lib::config::{AppConfig, BackendConfig};
use std::sync::Arc;
use storage::{ProjectCreate, ProjectStatus, Storage};
use supabase::SupabaseStorage;
use tracing::info;

fn sample_projects() -> Vec<ProjectCreate> {
    vec![
        ProjectCreate {
            title: "Brand Identity System".to_string(),
            description: "Complete visual identity redesign for a sustainable fashion startup, \
                          including logo design, color palette, typography, and brand guidelines."
                .to_string(),
            long_description: None,
            image_url: None,
            technologies: vec![
                "Brand Strategy".to_string(),
                "Visual Design".to_string(),
                "Identity Systems".to_string(),
            ],
            featured: true,
            show_links: None,
            live_url: Some("https://example-brand.com".to_string()),
            details_url: Some("https://github.com/alexjohnson/brand-project".to_string()),
            status: ProjectStatus::Active,
            sort_order: 1,
        },
        ProjectCreate {
            title: "Digital Experience Platform".to_string(),
            description: "User experience design and strategy for a fintech application focused on \
                          simplifying personal finance management."
                .to_string(),
            long_description: None,
            image_url: None,
            technologies: vec![
                "UX Research".to_string(),
                "Interaction Design".to_string(),
                "Prototyping".to_string(),
            ],
            featured: true,
            show_links: None,
            live_url: Some("https://fintech-demo.com".to_string()),
            details_url: Some("https://github.com/alexjohnson/fintech-ux".to_string()),
            status: ProjectStatus::Active,
            sort_order: 2,
        },
        ProjectCreate {
            title: "Creative Workshop Series".to_string(),
            description: "Designed and facilitated a series of creative workshops for design thinking \
                          and innovation at a local design studio."
                .to_string(),
            long_description: None,
            image_url: None,
            technologies: vec![
                "Workshop Design".to_string(),
                "Facilitation".to_string(),
                "Creative Strategy".to_string(),
            ],
            featured: false,
            show_links: None,
            live_url: Some("https://workshop-series.com".to_string()),
            details_url: Some("https://github.com/alexjohnson/workshop-materials".to_string()),
            status: ProjectStatus::Active,
            sort_order: 3,
        },
        ProjectCreate {
            title: "Storytelling Platform".to_string(),
            description: "Content strategy and visual design for a platform connecting storytellers \
                          with their audiences through immersive experiences."
                .to_string(),
            long_description: None,
            image_url: None,
            technologies: vec![
                "Content Strategy".to_string(),
                "Visual Storytelling".to_string(),
                "User Journey".to_string(),
            ],
            featured: false,
            show_links: None,
            live_url: Some("https://storytelling-platform.com".to_string()),
            details_url: Some("https://github.com/alexjohnson/storytelling-project".to_string()),
            status: ProjectStatus::Active,
            sort_order: 4,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;

    let storage: Arc<dyn Storage> = match &config.backend {
        BackendConfig::Supabase { endpoint, secret_key } => Arc::new(SupabaseStorage::new(endpoint, secret_key)),
        BackendConfig::Postgres { database_url } => {
            Arc::new(PgStorage::new(initialize_database(database_url).await?))
        }
    };

    info!("🌱 开始灌入示例项目...");

    // 已有内容时跳过，避免重复灌入
    let existing = storage.get_projects().await?;
    if !existing.is_empty() {
        info!("已存在 {} 个项目，跳过灌入", existing.len());
        return Ok(());
    }

    for project in sample_projects() {
        let created = storage.create_project(project).await?;
        info!("✓ 创建项目: {} ({})", created.title, created.id);
    }

    info!("✅ 示例项目灌入完成");
    Ok(())
}
