// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    response::Html,
};
use std::sync::Arc;

use crate::{
    application::dto::directory_request::DirectoryPageParams,
    domain::{
        models::faculty::Department,
        repositories::faculty_repository::FacultyRepository,
        services::search_service::SearchService,
    },
    presentation::{
        errors::AppError,
        views::directory_page::{self, DirectoryPage},
    },
    utils::text_processing::normalize_query,
};

/// 关键词列表中院系的排列顺序
const KEYWORD_ORDER: [Department; 2] = [Department::It, Department::Cse];

/// 渲染检索页面
///
/// 检索词会先去掉首尾空白并转为小写；为空时只显示提示，不做检索。
///
/// # 参数
///
/// * `faculty_repo` - 教师名录仓库实例
/// * `params` - 表单参数
///
/// # 返回值
///
/// 返回完整的 HTML 页面
pub async fn index<R>(
    Extension(faculty_repo): Extension<Arc<R>>,
    Query(params): Query<DirectoryPageParams>,
) -> Result<Html<String>, AppError>
where
    R: FacultyRepository + 'static,
{
    let service = SearchService::new(faculty_repo);
    let query = normalize_query(params.raw_query());
    let currently_teaching_only = params.currently_teaching_only();

    let keywords = service.specializations(&KEYWORD_ORDER).await?;
    let results = if query.is_empty() {
        None
    } else {
        Some(
            service
                .search_directory(&query, currently_teaching_only)
                .await?,
        )
    };

    let page = DirectoryPage {
        query: &query,
        currently_teaching_only,
        keywords: &keywords,
        results: results.as_deref(),
    };
    Ok(Html(directory_page::render(&page)?))
}
