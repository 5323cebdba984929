// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 检索页面表单参数
///
/// 未勾选的复选框不会出现在表单提交中，所以用隐藏字段 `submitted`
/// 区分“首次打开页面”（默认勾选）与“提交时取消勾选”。
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryPageParams {
    pub q: Option<String>,
    pub teaching: Option<String>,
    pub submitted: Option<String>,
}

impl DirectoryPageParams {
    pub fn raw_query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn currently_teaching_only(&self) -> bool {
        if self.submitted.is_some() {
            self.teaching.is_some()
        } else {
            true
        }
    }
}
