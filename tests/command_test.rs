use cli_init::command::{build_sub_commands, SubCommand};
use cli_init::error::Error;

#[test]
fn test_empty_sentinel() {
    let sub_commands = build_sub_commands(&[""]).unwrap();
    assert!(sub_commands.is_empty());
}

#[test]
fn test_empty_list() {
    let names: [&str; 0] = [];
    assert!(build_sub_commands(&names).unwrap().is_empty());
}

#[test]
fn test_order_is_preserved() {
    let names = ["add", "list", "delete"];
    let sub_commands = build_sub_commands(&names).unwrap();

    assert_eq!(sub_commands.len(), names.len());
    let built: Vec<&str> = sub_commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(built, names);
    assert_eq!(
        sub_commands[0],
        SubCommand {
            name: "add".to_string(),
            define_name: "commandAdd".to_string(),
            function_name: "doAdd".to_string(),
        }
    );
}

#[test]
fn test_build_is_deterministic() {
    let names = vec!["add".to_string(), "éditer".to_string()];
    assert_eq!(build_sub_commands(&names).unwrap(), build_sub_commands(&names).unwrap());
}

#[test]
fn test_empty_name_in_list() {
    match build_sub_commands(&["add", "", "list"]) {
        Err(Error::InvalidSubCommandNameError { name, .. }) => assert!(name.is_empty()),
        other => panic!("Expected InvalidSubCommandNameError, got {:?}", other),
    }
}

#[test]
fn test_duplicate_name() {
    match build_sub_commands(&["add", "list", "add"]) {
        Err(Error::DuplicateSubCommandNameError { name }) => assert_eq!(name, "add"),
        other => panic!("Expected DuplicateSubCommandNameError, got {:?}", other),
    }
}

#[test]
fn test_colliding_symbols() {
    // "list" and "List" both derive commandList / doList
    match build_sub_commands(&["list", "List"]) {
        Err(Error::DuplicateSubCommandNameError { name }) => assert_eq!(name, "List"),
        other => panic!("Expected DuplicateSubCommandNameError, got {:?}", other),
    }
}
