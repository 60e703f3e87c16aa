//! アップロードエリアコンポーネント
//!
//! 1ファイルのみ受け付ける。選択されたファイルはそのまま親へ渡す。

use leptos::html::Input;
use leptos::prelude::*;
use resume_assist_common::{Action, SessionState};
use web_sys::{DragEvent, File, FileList};

const ACCEPT: &str = ".pdf,.doc,.docx,.txt";

fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[component]
pub fn UploadArea<F>(state: RwSignal<SessionState>, on_file_selected: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();
    let is_busy = move || state.with(|s| s.is_in_flight(Action::Analyze));

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if is_busy() {
                return;
            }
            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                on_file_selected(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_busy() {
            set_is_dragover.set(true);
        }
    };

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |_| {
            let Some(input) = input_ref.get() else {
                return;
            };
            if let Some(file) = first_file(input.files()) {
                on_file_selected(file);
            }
            // 同じファイルを再選択しても change が発火するように
            input.set_value("");
        }
    };

    let open_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            class:disabled=is_busy
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=move |_| set_is_dragover.set(false)
        >
            <div class="upload-icon">"📄"</div>
            <p>"Drag and drop your resume here"</p>
            <p class="text-muted">"Supported formats: PDF, DOC, DOCX, TXT"</p>
            <input
                type="file"
                accept=ACCEPT
                class="hidden"
                node_ref=input_ref
                on:change=on_change
            />
            <button class="btn btn-primary" disabled=is_busy on:click=open_dialog>
                "Choose File"
            </button>
            {move || {
                state
                    .with(|s| s.uploaded_file.as_ref().map(|f| f.name.clone()))
                    .map(|name| view! { <p class="uploaded-file">"Uploaded: " {name}</p> })
            }}
        </div>
    }
}
