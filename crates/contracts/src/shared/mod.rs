pub mod paging;

pub use paging::{
    BatchDeleteRequest, BatchDeleteResponse, Identifiable, ListQuery, Page, PaginatedResponse,
};
