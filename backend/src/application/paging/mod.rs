pub mod pager;
pub mod policy;
pub mod source;

pub use pager::{LoadState, PagedItems, Pager, PagingSourceFactory};
pub use policy::{distinct_by, EndOfPaginationPolicy, PageCounter, PagingConfig, DEFAULT_PAGE_SIZE};
pub use source::{
    LoadErrorKind, LoadParams, LoadResult, LoadedPage, PageKey, PageLoadError, PagingSource,
    PagingState, FIRST_PAGE,
};
