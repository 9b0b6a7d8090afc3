use poem_openapi::{Object, types::Email};

#[derive(Object, Debug)]
pub struct LoginRequestDto {
    pub email: Email,
    #[oai(validator(min_length = 1))]
    pub password: String,
}

#[derive(Object, Debug)]
pub struct SignupRequestDto {
    pub email: Email,
    #[oai(validator(min_length = 6))]
    pub password: String,
    #[oai(validator(min_length = 1))]
    pub name: String,
}

#[derive(Object, Debug)]
pub struct DemoLoginRequestDto {
    pub email: Email,
    #[oai(validator(min_length = 6))]
    pub password: String,
}
