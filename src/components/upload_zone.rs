//! Evidence staging surface: file picker, drag-and-drop, preview chips.

use leptos::prelude::*;

use crate::state::attachments::AttachmentList;
use crate::util::files::icon_for;

/// Pull candidates out of a browser `FileList` and stage the admissible ones.
#[cfg(feature = "csr")]
fn stage_file_list(attachments: RwSignal<AttachmentList>, files: Option<web_sys::FileList>) {
    use crate::state::attachments::StagedFile;

    let Some(files) = files else { return };
    let candidates: Vec<StagedFile> = (0..files.length())
        .filter_map(|i| files.item(i))
        .map(|file| StagedFile { name: file.name(), mime: file.type_(), size: file.size() as u64 })
        .collect();
    attachments.update(|list| list.add_many(candidates));
}

#[component]
pub fn UploadZone() -> impl IntoView {
    let attachments = expect_context::<RwSignal<AttachmentList>>();
    let drag_over = RwSignal::new(false);

    let on_input_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            stage_file_list(attachments, input.files());
            // Clear the input so the same file can be picked again.
            input.set_value("");
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };
    let on_dragleave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "csr")]
        {
            stage_file_list(attachments, ev.data_transfer().and_then(|dt| dt.files()));
        }
    };

    view! {
        <div
            class="upload-zone"
            class:upload-zone--dragover=move || drag_over.get()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <label class="upload-zone__label">
                <span class="upload-zone__hint">"Drag files here or click to browse"</span>
                <span class="upload-zone__policy">"Images, audio, or video up to 50 MiB"</span>
                <input
                    class="upload-zone__input"
                    type="file"
                    multiple
                    accept="image/*,audio/*,video/*"
                    on:change=on_input_change
                />
            </label>
            <div class="upload-previews">
                {move || {
                    attachments
                        .get()
                        .files()
                        .iter()
                        .enumerate()
                        .map(|(index, file)| {
                            let name = file.name.clone();
                            view! {
                                <div class="upload-preview">
                                    <span class="upload-preview__icon">{icon_for(&file.mime)}</span>
                                    <span class="upload-preview__name" title=name.clone()>{name.clone()}</span>
                                    <button
                                        class="upload-preview__rm"
                                        type="button"
                                        title="Remove file"
                                        on:click=move |_| {
                                            attachments.update(|list| {
                                                let _ = list.remove(index);
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
