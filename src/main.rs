// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use std::sync::Arc;
use techguru::application::use_cases::seed_directory::SeedDirectoryUseCase;
use techguru::config::settings::Settings;
use techguru::domain::dataset;
use techguru::infrastructure::database::connection;
use techguru::infrastructure::repositories::faculty_repo_impl::FacultyRepositoryImpl;
use techguru::infrastructure::repositories::seed_stamp_repo_impl::SeedStampRepositoryImpl;
use techguru::presentation::routes;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};
use techguru::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting techguru...");

    // Initialize Prometheus Metrics
    let metrics_handle = techguru::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(seed_policy = ?settings.seed.policy, "Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Seed the faculty directory from the built-in dataset
    let faculty_repo = Arc::new(FacultyRepositoryImpl::new(db.clone()));
    let stamp_repo = Arc::new(SeedStampRepositoryImpl::new(db.clone()));
    let outcome = SeedDirectoryUseCase::new(faculty_repo.clone(), stamp_repo, settings.seed.policy)
        .execute(dataset::builtin())
        .await?;
    info!(?outcome, "Faculty directory ready");

    // 5. Start HTTP server
    let app = routes::routes::<FacultyRepositoryImpl>()
        .layer(Extension(faculty_repo))
        .layer(Extension(metrics_handle))
        .layer(TraceLayer::new_for_http());

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
