// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 探测引擎模块
///
/// 封装对外的单次HTTP请求，传输层失败以 `EngineError` 返回
pub mod reqwest_engine;
pub mod traits;
