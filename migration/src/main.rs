// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 主函数
///
/// 独立运行的 websites 表迁移工具，读取 DATABASE_URL
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
