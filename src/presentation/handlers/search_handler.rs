// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::search_request::{
        DepartmentResultsDto, DepartmentSummaryDto, SearchRequestDto, SearchResponseDto,
    },
    domain::{
        models::faculty::{Department, DepartmentMatches},
        repositories::faculty_repository::FacultyRepository,
        services::search_service::SearchService,
    },
    presentation::errors::AppError,
};

/// 处理 JSON 检索请求
///
/// 与页面不同，检索词按原样使用，不做去空白处理。
///
/// # 参数
///
/// * `faculty_repo` - 教师名录仓库实例
/// * `params` - 查询参数
///
/// # 错误
///
/// - 院系代码无效或检索词过长时返回 400
/// - 仓库操作失败时返回 500
pub async fn search<R>(
    Extension(faculty_repo): Extension<Arc<R>>,
    Query(params): Query<SearchRequestDto>,
) -> Result<Json<SearchResponseDto>, AppError>
where
    R: FacultyRepository + 'static,
{
    params.validate()?;
    let service = SearchService::new(faculty_repo);

    let matches = match params.department.as_deref() {
        Some(code) => {
            let department: Department = code.parse()?;
            let faculty = service
                .search(&params.q, department, params.teaching)
                .await?;
            vec![DepartmentMatches {
                department,
                faculty,
            }]
        }
        None => service.search_directory(&params.q, params.teaching).await?,
    };

    Ok(Json(SearchResponseDto {
        query: params.q,
        currently_teaching_only: params.teaching,
        departments: matches.into_iter().map(DepartmentResultsDto::from).collect(),
    }))
}

/// 列出所有院系及其记录数
pub async fn departments<R>(
    Extension(faculty_repo): Extension<Arc<R>>,
) -> Result<Json<Vec<DepartmentSummaryDto>>, AppError>
where
    R: FacultyRepository + 'static,
{
    let mut summaries = Vec::with_capacity(Department::ALL.len());
    for department in Department::ALL {
        summaries.push(DepartmentSummaryDto {
            department,
            label: department.label().to_string(),
            records: faculty_repo.count(department).await?,
        });
    }
    Ok(Json(summaries))
}
