//! # Cadastro de Profissionais
//!
//! API CRUD de profissionais e dos conhecimentos de cada um, servida por
//! Axum sobre uma base SQLite.
//!
//! | Módulo | Camada |
//! |--------|--------|
//! | [`core`] | Tipos do domínio (`Professional`, `Knowledge`) |
//! | [`persistence`] | Base relacional (sqlx + SQLite) |
//! | [`web`] | Router, handlers, validação e documentação |
//! | [`config`] | Configuração via variáveis de ambiente |

pub mod config;
pub mod core;
pub mod persistence;
pub mod web;
