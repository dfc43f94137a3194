// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 网站（website）：用户登记并持久化的网站记录
/// - 网站状态（website_status）：单次探测得到的规范化结果
pub mod website;
pub mod website_status;
