/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Classification of failed responses
pub mod classifier;
/// Request execution: transport seam, token handling and response validation
pub mod http;
/// Request descriptors and diagnostic request context
pub mod requests;
/// Response envelope and paging metadata
pub mod responses;
