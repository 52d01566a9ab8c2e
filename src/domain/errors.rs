use custom_error::custom_error;

custom_error! {
///! Error for invalid user-supplied newsletter fields.
pub MalformedInput
    InvalidTitle{message:String} = "{message}",
    InvalidBody{message:String} = "{message}",
}
