//! Product management: CRUD plus the read-side composition that joins each
//! product with its category name and specification map.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/products` | No | List products with `category_name` and `specs` |
//! | GET | `/api/products/{id}` | No | Get one product (same augmentation) |
//! | POST | `/api/products` | Admin | Create product with optional specs |
//! | PUT | `/api/products/{id}` | Admin | Update product, replacing its spec set |
//! | DELETE | `/api/products/{id}` | Admin | Delete product (specs cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
