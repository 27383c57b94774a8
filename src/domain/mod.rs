mod caseworker_name;
mod country_code_list;

pub use caseworker_name::CaseworkerName;
pub use country_code_list::CountryCodeList;
