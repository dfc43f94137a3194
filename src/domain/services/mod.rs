// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 元数据提取（metadata_service）：从 HTML 中提取标题与 favicon
/// - 状态探测（status_service）：执行探测并生成规范化结果
pub mod metadata_service;
pub mod status_service;
