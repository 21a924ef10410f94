//! Category management for the product catalog.
//!
//! Reads are public; writes sit behind the admin gate configured in `main`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories ordered by id |
//! | GET | `/api/categories/{id}` | No | Get one category |
//! | POST | `/api/categories` | Admin | Create category |
//! | PUT | `/api/categories/{id}` | Admin | Update category |
//! | DELETE | `/api/categories/{id}` | Admin | Delete category (rejected while products reference it) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
