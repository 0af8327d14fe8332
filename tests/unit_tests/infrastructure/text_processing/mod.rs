mod composite_file_loader_test;
mod docx_adapter_test;
mod fixtures;
mod plain_text_adapter_test;
